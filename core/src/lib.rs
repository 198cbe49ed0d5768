//! Interpreter for the Chip-8 virtual machine.
//!
//! The host owns the window, the keyboard and the wall clock. It feeds key state in,
//! calls [`Chip8::advance`] (or [`Chip8::cycle`] and [`Chip8::tick_timers`] directly)
//! and takes the frame buffer back out.

pub use chip8::Chip8;
pub use clock::Pacer;
pub use config::{Config, KeyRelease, TimerMode};
pub use error::{Error, Result};
pub use state::FrameBuffer;

mod chip8;
mod clock;
mod config;
pub mod constants;
mod error;
pub mod instruction;
pub mod opcode;
mod operations;
pub mod state;
