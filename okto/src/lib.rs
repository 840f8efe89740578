mod cpu;
mod error;
mod machine;
mod opcode;

pub mod constants;

pub use self::machine::{Flow, Machine, MachineConf};
pub use self::opcode::Instruction;

/// Version of this implementation, as published.
pub const IMPL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Borrowed view of the 64x32 monochrome framebuffer.
pub type DisplayBuffer<'a> = &'a [bool; constants::DISPLAY_BUFFER_SIZE];

pub mod prelude {
    pub use super::{
        error::{OktoError, OktoResult},
        machine::{Flow, Machine, MachineConf},
        opcode::Instruction,
    };
}
