use std::fmt;

/// # Opcodes
///
/// Opcodes are 16 bits each. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. CLS; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` represent a 12-bit address
/// - `(_, _, n, n)` encodes some data that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` refers either to the register Vx or a range of registers V0..Vx
/// - `(_, _, n, _)` refers to the the register Vy
///
/// An `Opcode` is a plain value decoded fresh from every fetched word; all fields are
/// views over `word`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    /// The raw instruction word.
    pub word: u16,
    /// `[i___]`
    pub primary: u8,
    /// `[_x__]`
    pub x: u8,
    /// `[__y_]`
    pub y: u8,
    /// `[___n]`
    pub nibble: u8,
    /// `[__kk]`
    pub byte: u8,
    /// `[_adr]`
    pub addr: u16,
}

impl Opcode {
    pub fn decode(word: u16) -> Self {
        Opcode {
            word,
            primary: ((word & 0xF000) >> 12) as u8,
            x: ((word & 0x0F00) >> 8) as u8,
            y: ((word & 0x00F0) >> 4) as u8,
            nibble: (word & 0x000F) as u8,
            byte: (word & 0x00FF) as u8,
            addr: word & 0x0FFF,
        }
    }

    /// Returns the Opcode's component nibbles.
    pub fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.primary, self.x, self.y, self.nibble)
    }

    /// Index of register Vx
    pub fn vx(&self) -> usize {
        self.x as usize
    }

    /// Index of register Vy
    pub fn vy(&self) -> usize {
        self.y as usize
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Self {
        Opcode::decode(word)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.word)
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        let op = Opcode::decode(0xABCD);
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_x() {
        let op = Opcode::decode(0xABCD);
        assert_eq!(op.x, 0xB);
        assert_eq!(op.vx(), 0xB);
    }

    #[test]
    fn test_y() {
        let op = Opcode::decode(0xABCD);
        assert_eq!(op.y, 0xC);
        assert_eq!(op.vy(), 0xC);
    }

    #[test]
    fn test_nibble() {
        let op = Opcode::decode(0xABCD);
        assert_eq!(op.nibble, 0xD);
    }

    #[test]
    fn test_byte() {
        let op = Opcode::decode(0xABCD);
        assert_eq!(op.byte, 0xCD);
    }

    #[test]
    fn test_addr() {
        let op = Opcode::decode(0xABCD);
        assert_eq!(op.addr, 0x0BCD);
    }

    #[test]
    fn test_fields_match_masks() {
        for &word in &[0x0000, 0x00E0, 0x6341, 0xB3A5, 0xD01F, 0xF265, 0xFFFF] {
            let op = Opcode::decode(word);
            assert_eq!(op.addr, word & 0x0FFF);
            assert_eq!(u16::from(op.byte), word & 0x00FF);
            assert_eq!(u16::from(op.nibble), word & 0x000F);
            assert_eq!(u16::from(op.x), (word >> 8) & 0xF);
            assert_eq!(u16::from(op.y), (word >> 4) & 0xF);
            assert_eq!(u16::from(op.primary), word >> 12);
        }
    }

    #[test]
    fn test_decoding_is_pure() {
        assert_eq!(Opcode::decode(0xB3A5), Opcode::from(0xB3A5));
    }
}
