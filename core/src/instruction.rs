use rand::RngCore;

use crate::error::{Error, Result};
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// The signature every opcode handler shares
pub type Operation = fn(op: &Opcode, state: &mut State, rng: &mut dyn RngCore) -> Result<()>;

/// A handler selected for one decoded Opcode, plus its assembly mnemonic for tracing
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub execute: Operation,
}

fn instruction(mnemonic: &'static str, execute: Operation) -> Instruction {
    Instruction { mnemonic, execute }
}

/// Selects the correct Instruction for a given Opcode
///
/// Most primary nibbles name a single instruction. 0x0, 0x5, 0x8, 0x9, 0xE and 0xF are
/// further split on the low nibble or byte, and anything left over is an error carrying
/// the `address` the word was fetched from.
pub fn from_op(op: &Opcode, address: u16) -> Result<Instruction> {
    let instruction = match op.primary {
        0x0 => match op.addr {
            0x0E0 => instruction("CLS", clr),
            0x0EE => instruction("RET", rts),
            _ => return Err(unknown(op, address)),
        },
        0x1 => instruction("JP addr", jump),
        0x2 => instruction("CALL addr", call),
        0x3 => instruction("SE Vx, byte", ske),
        0x4 => instruction("SNE Vx, byte", skne),
        0x5 => match op.nibble {
            0x0 => instruction("SE Vx, Vy", skre),
            _ => return Err(unknown(op, address)),
        },
        0x6 => instruction("LD Vx, byte", load),
        0x7 => instruction("ADD Vx, byte", add),
        0x8 => match op.nibble {
            0x0 => instruction("LD Vx, Vy", mv),
            0x1 => instruction("OR Vx, Vy", or),
            0x2 => instruction("AND Vx, Vy", and),
            0x3 => instruction("XOR Vx, Vy", xor),
            0x4 => instruction("ADD Vx, Vy", addr),
            0x5 => instruction("SUB Vx, Vy", sub),
            0x6 => instruction("SHR Vx", shr),
            0x7 => instruction("SUBN Vx, Vy", subn),
            0xE => instruction("SHL Vx", shl),
            _ => return Err(unknown(op, address)),
        },
        0x9 => match op.nibble {
            0x0 => instruction("SNE Vx, Vy", skrne),
            _ => return Err(unknown(op, address)),
        },
        0xA => instruction("LD I, addr", loadi),
        0xB => instruction("JP V0, addr", jumpi),
        0xC => instruction("RND Vx, byte", rnd),
        0xD => instruction("DRW Vx, Vy, n", draw),
        0xE => match op.byte {
            0x9E => instruction("SKP Vx", skpr),
            0xA1 => instruction("SKNP Vx", skup),
            _ => return Err(unknown(op, address)),
        },
        0xF => match op.byte {
            0x07 => instruction("LD Vx, DT", moved),
            0x0A => instruction("LD Vx, K", keyd),
            0x15 => instruction("LD DT, Vx", setd),
            0x18 => instruction("LD ST, Vx", sets),
            0x1E => instruction("ADD I, Vx", addi),
            0x29 => instruction("LD F, Vx", ldspr),
            0x33 => instruction("LD B, Vx", bcd),
            0x55 => instruction("LD [I], Vx", stor),
            0x65 => instruction("LD Vx, [I]", read),
            _ => return Err(unknown(op, address)),
        },
        _ => return Err(unknown(op, address)),
    };
    Ok(instruction)
}

fn unknown(op: &Opcode, address: u16) -> Error {
    Error::UnknownOpcode {
        address,
        opcode: op.word,
    }
}
