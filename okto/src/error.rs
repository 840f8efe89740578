//! Result and errors.
use std::fmt::{self, Display, Formatter};
use std::io;

pub type OktoResult<T> = std::result::Result<T, OktoError>;

#[derive(Debug)]
pub enum OktoError {
    /// Attempt to load a program image that can't fit in memory.
    ProgramTooLarge { len: usize },
    /// Font table with a length other than `FONT_TABLE_SIZE`.
    FontSize { len: usize },
    /// Key index outside the 16-key keypad.
    KeyRange(u8),
    /// A computed address fell outside addressable memory.
    OutOfBounds { addr: usize },
    /// Subroutine call nested deeper than the stack allows.
    StackOverflow,
    /// Subroutine return with no saved return address.
    StackUnderflow,
    Io(io::Error),
    Fmt(fmt::Error),
}

impl Display for OktoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgramTooLarge { len } => {
                write!(f, "program image of {} bytes too large for memory", len)
            }
            Self::FontSize { len } => {
                write!(f, "font table must be 80 bytes, got {}", len)
            }
            Self::KeyRange(key) => {
                write!(f, "key index {} outside keypad range 0-15", key)
            }
            Self::OutOfBounds { addr } => {
                write!(f, "address {:#05X} outside addressable memory", addr)
            }
            Self::StackOverflow => write!(f, "call stack overflow"),
            Self::StackUnderflow => write!(f, "call stack underflow"),
            Self::Io(err) => write!(f, "{}", err),
            Self::Fmt(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for OktoError {}

impl From<io::Error> for OktoError {
    fn from(err: io::Error) -> Self {
        OktoError::Io(err)
    }
}

impl From<fmt::Error> for OktoError {
    fn from(err: fmt::Error) -> Self {
        OktoError::Fmt(err)
    }
}
