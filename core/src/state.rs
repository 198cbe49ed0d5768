use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_START, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET,
    STACK_SIZE,
};
use crate::error::{Error, Result};

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Index of the register that doubles as the carry/borrow/collision flag
pub const FLAG: usize = 0xF;

/// A snapshot of the machine's internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flags register; arithmetic and sprite instructions overwrite it
/// - (i) a 16-bit memory address register; only the low 12 bits reach memory
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the next free slot on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound), counted down toward zero at 60Hz
///
/// ## Memory
/// - 64 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x050..0x0A0 holds the font sprite sheet
///     - programs are loaded at 0x200
/// - 32x64 frame buffer
///
/// ## Input
/// - pressed status of keys 0..F, written by the host between cycles
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub stack: [u16; STACK_SIZE],
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keys: [bool; 16],
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        memory[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_SIZE],
            delay_timer: 0,
            sound_timer: 0,
            memory,
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            keys: [false; 16],
        }
    }

    /// Copies a program image into memory at the load address
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        let start = PROGRAM_START as usize;
        let capacity = MEMORY_SIZE - start;
        if program.len() > capacity {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                capacity,
            });
        }
        self.memory[start..start + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Reads a byte; addresses wrap at the top of memory
    pub fn read(&self, address: u16) -> u8 {
        self.memory[address as usize % MEMORY_SIZE]
    }

    /// Writes a byte; addresses wrap at the top of memory
    pub fn write(&mut self, address: u16, value: u8) {
        self.memory[address as usize % MEMORY_SIZE] = value;
    }

    /// Gets the big-endian word currently pointed at by the pc.
    pub fn fetch(&self) -> u16 {
        let left = u16::from(self.read(self.pc));
        let right = u16::from(self.read(self.pc.wrapping_add(1)));
        left << 8 | right
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG] = flag as u8;
    }

    /// STACK.push(address)
    pub fn push(&mut self, address: u16) -> Result<()> {
        if self.sp == STACK_SIZE {
            return Err(Error::StackOverflow { pc: self.pc });
        }
        self.stack[self.sp] = address;
        self.sp += 1;
        Ok(())
    }

    /// STACK.pop()
    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow { pc: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }

    /// Lowest index among the currently pressed keys
    pub fn first_pressed_key(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|k| k as u8)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_font_and_pc() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.memory[0x050..0x0A0], SPRITE_SHEET[..]);
        assert!(state.memory[..0x050].iter().all(|&b| b == 0));
        assert!(state.memory[0x0A0..].iter().all(|&b| b == 0));
        assert_eq!(state.sp, 0);
        assert_eq!(state.v, [0; 16]);
    }

    #[test]
    fn test_loads_program_at_0x200() {
        let mut state = State::new();
        state.load_program(&[0x63, 0x41, 0x73, 0x01]).unwrap();
        assert_eq!(state.memory[0x200..0x204], [0x63, 0x41, 0x73, 0x01]);
    }

    #[test]
    fn test_loads_program_filling_memory() {
        let mut state = State::new();
        let program = vec![0xAB; MEMORY_SIZE - 0x200];
        state.load_program(&program).unwrap();
        assert_eq!(state.memory[MEMORY_SIZE - 1], 0xAB);
    }

    #[test]
    fn test_rejects_oversized_program() {
        let mut state = State::new();
        let program = vec![0; MEMORY_SIZE - 0x200 + 1];
        match state.load_program(&program) {
            Err(Error::ProgramTooLarge { size, capacity }) => {
                assert_eq!(size, 0xE01);
                assert_eq!(capacity, 0xE00);
            }
            other => panic!("expected ProgramTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_combines_bytes() {
        let mut state = State::new();
        state.memory[0x200..0x202].copy_from_slice(&[0xAA, 0xBB]);
        assert_eq!(state.fetch(), 0xAABB);
    }

    #[test]
    fn test_fetch_wraps_at_top_of_memory() {
        let mut state = State::new();
        state.pc = 0xFFF;
        state.memory[0xFFF] = 0x12;
        state.memory[0x000] = 0x34;
        assert_eq!(state.fetch(), 0x1234);
    }

    #[test]
    fn test_read_and_write_wrap() {
        let mut state = State::new();
        state.write(0x1005, 0x42);
        assert_eq!(state.memory[0x005], 0x42);
        assert_eq!(state.read(0xF005), 0x42);
    }

    #[test]
    fn test_stack_overflow_and_underflow() {
        let mut state = State::new();
        assert!(matches!(state.pop(), Err(Error::StackUnderflow { pc: 0x200 })));
        for depth in 0..STACK_SIZE {
            state.push(depth as u16).unwrap();
        }
        assert!(matches!(
            state.push(0xABC),
            Err(Error::StackOverflow { pc: 0x200 })
        ));
        assert_eq!(state.sp, STACK_SIZE);
        assert_eq!(state.pop().unwrap(), (STACK_SIZE - 1) as u16);
    }

    #[test]
    fn test_first_pressed_key_is_lowest() {
        let mut state = State::new();
        assert_eq!(state.first_pressed_key(), None);
        state.keys[0xC] = true;
        state.keys[0x3] = true;
        assert_eq!(state.first_pressed_key(), Some(0x3));
    }
}
