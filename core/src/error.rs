use std::io;

/// Everything that can stop a running program.
///
/// None of these are recovered from inside the interpreter; the host decides
/// whether to halt or start a fresh session.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown opcode {opcode:04X} at {address:03X}")]
    UnknownOpcode { address: u16, opcode: u16 },

    #[error("stack overflow calling from {pc:03X}")]
    StackOverflow { pc: u16 },

    #[error("stack underflow returning from {pc:03X}")]
    StackUnderflow { pc: u16 },

    #[error("program is {size} bytes but only {capacity} fit in memory")]
    ProgramTooLarge { size: usize, capacity: usize },

    #[error("unable to read program image")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
