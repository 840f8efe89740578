//! Constant values of the emulated machine.

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 0x10; // 16

/// The lower memory space was historically used for the interpreter itself,
/// and holds the font glyphs on machines that have them loaded.
pub const MEM_START: usize = 0x200; // 512
pub const MEM_SIZE: usize = 0x1000; // 4096

/// Largest program image that fits between `MEM_START` and the last
/// addressable byte.
pub const MAX_PROGRAM_SIZE: usize = 0xFFF - MEM_START;

/// Levels of nesting allowed in the call stack.
///
/// Matches the reference hardware. A deeper call is reported as a
/// recoverable error instead of growing the stack.
pub const STACK_DEPTH: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_BUFFER_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;
pub const DISPLAY_WIDTH_MASK: usize = DISPLAY_WIDTH - 1;
pub const DISPLAY_HEIGHT_MASK: usize = DISPLAY_HEIGHT - 1;

/// Number of keys on the keypad (0x0-0xF)
pub const KEY_COUNT: u8 = 16;

/// Frequency in hertz at which the delay and sound timers count down.
pub const TIMER_FREQUENCY: u64 = 60;

/// Height in bytes of a single font glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Length in bytes of the full 16-glyph font table.
pub const FONT_TABLE_SIZE: usize = GLYPH_HEIGHT * 16;

/// Storage type for the 12-bit memory addresses.
pub type Address = u16;
