/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Where program images are loaded and where execution starts
pub const PROGRAM_START: u16 = 0x200;

/// Where the font table lives in low memory
pub const FONT_START: u16 = 0x050;

/// Bytes per font glyph
pub const FONT_GLYPH_SIZE: u16 = 5;

/// Maximum subroutine nesting depth
pub const STACK_SIZE: usize = 64;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Default instruction execution rate
pub const DEFAULT_INSTRUCTIONS_PER_SECOND: u32 = 700;

/// Delay and sound timers count down at this rate
pub const TIMER_HZ: u32 = 60;

/// # Sprite sheet
/// One 4x5 glyph for each hexadecimal digit, stored a row per byte (high nibble only).
///
/// ```text
/// 0: 0xF0 ****    1: 0x20   *
///    0x90 *  *       0x60  **
///    0x90 *  *       0x20   *
///    0x90 *  *       0x20   *
///    0xF0 ****       0x70  ***
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
