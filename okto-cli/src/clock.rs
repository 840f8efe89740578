//! Frame clock.
use std::{
    thread,
    time::{Duration, Instant},
};

use okto::constants::TIMER_FREQUENCY;

/// Time between display frames and timer ticks.
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / TIMER_FREQUENCY);

/// Paces the host loop at the 60 Hz frame cadence.
///
/// The interpreter core owns no timing; the host batches steps per frame
/// and waits on this clock between frames.
pub struct FrameClock {
    deadline: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            deadline: Instant::now() + FRAME_TIME,
        }
    }

    /// Block the current thread until the next frame is due.
    ///
    /// `thread::sleep` resolution is coarse enough to overshoot whole
    /// frames on some platforms, so the wait yields instead.
    pub fn wait(&mut self) {
        while Instant::now() < self.deadline {
            thread::yield_now();
        }
        // When the loop has fallen behind, drop the missed frames rather
        // than bursting to catch up.
        self.deadline = Instant::now() + FRAME_TIME;
    }
}
