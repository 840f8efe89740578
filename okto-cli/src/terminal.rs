//! Crossterm-based screen and keypad.
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand, QueueableCommand,
};
use okto::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use okto::prelude::*;

/// Raw-mode terminal hosting the machine's display and keypad.
///
/// The terminal state is restored on drop, even when the run loop exits
/// with an error.
pub struct Terminal {
    /// Whether the run loop should keep going.
    running: bool,
}

impl Terminal {
    pub fn setup() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        io::stdout()
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?
            .execute(EnterAlternateScreen)?
            .execute(Hide)?
            .execute(Clear(ClearType::All))?;

        Ok(Self { running: true })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drain pending terminal events into the machine's keypad state.
    ///
    /// Esc stops the run loop. Key releases are only delivered on
    /// terminals that support the enhancement flags; without them a key
    /// stays down until the program exits, which most programs tolerate.
    pub fn pump_input(&mut self, machine: &mut Machine) -> OktoResult<()> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
                continue;
            };

            if code == KeyCode::Esc {
                self.running = false;
                continue;
            }

            let KeyCode::Char(ch) = code else { continue };
            if let Some(key) = keymap(ch) {
                let pressed = !matches!(kind, KeyEventKind::Release);
                machine.set_key(key, pressed)?;
            }
        }

        Ok(())
    }

    /// Blit the framebuffer, two terminal columns per pixel.
    pub fn render(&mut self, machine: &Machine) -> io::Result<()> {
        let mut frame = String::with_capacity((DISPLAY_WIDTH * 2 + 2) * DISPLAY_HEIGHT + 8);

        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                frame.push_str(if machine.read_pixel(x, y) { "██" } else { "  " });
            }
            frame.push_str("\r\n");
        }
        frame.push_str(if machine.sound_active() {
            "[ BEEP ]"
        } else {
            "        "
        });

        let mut stdout = io::stdout();
        stdout.queue(MoveTo(0, 0))?.queue(Print(frame))?;
        stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        fn try_drop() -> io::Result<()> {
            io::stdout()
                .execute(Show)?
                .execute(LeaveAlternateScreen)?
                .execute(PopKeyboardEnhancementFlags)?;
            terminal::disable_raw_mode()?;
            Ok(())
        }

        // Ignore errors.
        try_drop().ok();
    }
}

/// Map the left-hand block of a QWERTY keyboard onto the hex keypad.
///
/// ```text
/// 1 2 3 4        1 2 3 C
/// q w e r   ->   4 5 6 D
/// a s d f        7 8 9 E
/// z x c v        A 0 B F
/// ```
fn keymap(ch: char) -> Option<u8> {
    let key = match ch.to_ascii_lowercase() {
        '1' => 0x1,
        '2' => 0x2,
        '3' => 0x3,
        '4' => 0xC,
        'q' => 0x4,
        'w' => 0x5,
        'e' => 0x6,
        'r' => 0xD,
        'a' => 0x7,
        's' => 0x8,
        'd' => 0x9,
        'f' => 0xE,
        'z' => 0xA,
        'x' => 0x0,
        'c' => 0xB,
        'v' => 0xF,
        _ => return None,
    };
    Some(key)
}
