/// Field accessors for a raw 16-bit instruction word.
///
/// The high nibble picks the instruction family. Within a family the rest of the
/// word is read as one or more of these fields, depending on the instruction:
///
/// | field | bits   | used as                                       |
/// |-------|--------|-----------------------------------------------|
/// | `x`   | `_X__` | register index, or the top of a V0..=VX range |
/// | `y`   | `__Y_` | second register index                         |
/// | `n`   | `___N` | sprite height, or a sub-operation selector    |
/// | `nn`  | `__NN` | byte immediate, or a sub-operation selector   |
/// | `nnn` | `_NNN` | 12-bit address                                |
pub trait Opcode {
    /// All four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    fn x(&self) -> u8;

    fn y(&self) -> u8;

    fn n(&self) -> u8;

    fn nn(&self) -> u8;

    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (((self & 0xF000) >> 12) as u8, self.x(), self.y(), self.n())
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combines the two bytes of an instruction as they sit in memory.
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}
