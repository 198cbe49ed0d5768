use rand::RngCore;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, FONT_START};
use crate::error::Result;
use crate::opcode::Opcode;
use crate::state::State;

// The pc has already been moved past the current instruction when these run,
// so skips add one more instruction width and jumps overwrite it.

/// clear
pub fn clr(_op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.pc = state.pop()?;
    Ok(())
}

/// PC = addr
pub fn jump(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.pc = op.addr;
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.push(state.pc)?;
    state.pc = op.addr;
    Ok(())
}

fn skip_if(condition: bool, state: &mut State) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// if Vx == kk then pc += 2
pub fn ske(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    skip_if(state.v[op.vx()] == op.byte, state);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    skip_if(state.v[op.vx()] != op.byte, state);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    skip_if(state.v[op.vx()] == state.v[op.vy()], state);
    Ok(())
}

/// Vx = kk
pub fn load(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.v[op.vx()] = op.byte;
    Ok(())
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it. VF is untouched.
pub fn add(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.v[op.vx()] = state.v[op.vx()].wrapping_add(op.byte);
    Ok(())
}

/// Vx = Vy
pub fn mv(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.v[op.vx()] = state.v[op.vy()];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.v[op.vx()] |= state.v[op.vy()];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.v[op.vx()] &= state.v[op.vy()];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.v[op.vx()] ^= state.v[op.vy()];
    Ok(())
}

// The flag-setting arithmetic below writes Vx first and VF last, so with x == F
// the flag is what survives.

/// Vx += Vy; VF = carry
pub fn addr(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let sum = u16::from(state.v[op.vx()]) + u16::from(state.v[op.vy()]);
    state.v[op.vx()] = (sum & 0xFF) as u8;
    state.set_flag(sum > 0xFF);
    Ok(())
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let (vx, vy) = (state.v[op.vx()], state.v[op.vy()]);
    state.v[op.vx()] = vx.wrapping_sub(vy);
    state.set_flag(vx > vy);
    Ok(())
}

/// Vx >>= 1; VF = bit shifted out
pub fn shr(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let vx = state.v[op.vx()];
    state.v[op.vx()] = vx >> 1;
    state.set_flag(vx & 0x1 == 0x1);
    Ok(())
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let (vx, vy) = (state.v[op.vx()], state.v[op.vy()]);
    state.v[op.vx()] = vy.wrapping_sub(vx);
    state.set_flag(vy > vx);
    Ok(())
}

/// Vx <<= 1; VF = bit shifted out
pub fn shl(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let vx = state.v[op.vx()];
    state.v[op.vx()] = vx << 1;
    state.set_flag(vx & 0x80 == 0x80);
    Ok(())
}

/// if Vx != Vy then pc +=2
pub fn skrne(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    skip_if(state.v[op.vx()] != state.v[op.vy()], state);
    Ok(())
}

/// I = addr
pub fn loadi(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.i = op.addr;
    Ok(())
}

/// PC = V0 + addr
/// Always V0, whatever x says.
pub fn jumpi(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.pc = u16::from(state.v[0x0]) + op.addr;
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rnd(op: &Opcode, state: &mut State, rng: &mut dyn RngCore) -> Result<()> {
    let mut rand_byte = [0u8; 1];
    rng.fill_bytes(&mut rand_byte);
    state.v[op.vx()] = rand_byte[0] & op.byte;
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer.
/// Every pixel wraps around the screen edges on its own, not just the origin.
/// Sets VF if any pixels would be erased
pub fn draw(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let origin_x = state.v[op.vx()] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[op.vy()] as usize % DISPLAY_HEIGHT;
    let mut collision = false;

    for row in 0..op.nibble as usize {
        let y = (origin_y + row) % DISPLAY_HEIGHT;
        let sprite_byte = state.read(state.i.wrapping_add(row as u16));
        for bit in 0..8 {
            if (sprite_byte >> (7 - bit)) & 0x1 == 0 {
                continue;
            }
            let x = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel = &mut state.frame_buffer[y][x];
            collision |= *pixel;
            *pixel = !*pixel;
        }
    }

    state.set_flag(collision);
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let key = (state.v[op.vx()] & 0xF) as usize;
    skip_if(state.keys[key], state);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let key = (state.v[op.vx()] & 0xF) as usize;
    skip_if(!state.keys[key], state);
    Ok(())
}

/// Vx = DT
pub fn moved(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.v[op.vx()] = state.delay_timer;
    Ok(())
}

/// await keypress for Vx
/// With nothing pressed the pc is wound back so this instruction runs again next cycle.
pub fn keyd(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    match state.first_pressed_key() {
        Some(key) => state.v[op.vx()] = key,
        None => state.pc = state.pc.wrapping_sub(0x2),
    }
    Ok(())
}

/// DT = Vx
pub fn setd(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.delay_timer = state.v[op.vx()];
    Ok(())
}

/// ST = Vx
pub fn sets(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.sound_timer = state.v[op.vx()];
    Ok(())
}

/// I += Vx
pub fn addi(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.vx()]));
    Ok(())
}

/// I = FONT + Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    state.i = FONT_START + u16::from(state.v[op.vx()]) * FONT_GLYPH_SIZE;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    let value = state.v[op.vx()];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.write(state.i.wrapping_add(offset as u16), *digit);
    }
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    for register in 0..=op.vx() {
        state.write(state.i.wrapping_add(register as u16), state.v[register]);
    }
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: &Opcode, state: &mut State, _rng: &mut dyn RngCore) -> Result<()> {
    for register in 0..=op.vx() {
        state.v[register] = state.read(state.i.wrapping_add(register as u16));
    }
    Ok(())
}
