use log::debug;

use crate::constants::{
    ADDRESS_MASK, FONT_OFFSET, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET,
};
use crate::error::RomError;

/// # Memory
/// 4096 bytes of addressable memory.
/// - 0x000..0x050 is unused
/// - 0x050..0x0A0 holds the sprite sheet for the hex digits
/// - 0x200.. is where ROMs are loaded
///
/// All accesses wrap to 12 bits, so no address can fall outside of memory.
#[derive(Copy, Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = FONT_OFFSET as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read(&self, address: u16) -> u8 {
        self.bytes[(address & ADDRESS_MASK) as usize]
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.bytes[(address & ADDRESS_MASK) as usize] = value;
    }

    /// Copies a ROM verbatim into memory starting at `PROGRAM_START`.
    pub fn load(&mut self, rom: &[u8]) -> Result<(), RomError> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(RomError::TooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_is_preloaded() {
        let memory = Memory::new();
        let font = FONT_OFFSET as usize;
        assert_eq!(memory.as_slice()[font..font + 80], SPRITE_SHEET[..]);
        assert!(memory.as_slice()[..font].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_addresses_wrap_to_twelve_bits() {
        let mut memory = Memory::new();
        memory.write(0x1000, 0xAB);
        assert_eq!(memory.read(0x0000), 0xAB);
        assert_eq!(memory.read(0xF000), 0xAB);
    }

    #[test]
    fn test_loads_rom_at_program_start() {
        let mut memory = Memory::new();
        memory.load(&[0x6A, 0x05]).unwrap();
        assert_eq!(memory.read(0x200), 0x6A);
        assert_eq!(memory.read(0x201), 0x05);
        assert_eq!(memory.read(0x202), 0x00);
    }

    #[test]
    fn test_loads_largest_rom() {
        let mut memory = Memory::new();
        let rom = vec![0xAA; MAX_ROM_SIZE];
        memory.load(&rom).unwrap();
        assert_eq!(memory.read(0xFFE), 0xAA);
        assert_eq!(memory.read(0xFFF), 0x00);
    }

    #[test]
    fn test_rejects_oversized_rom() {
        let mut memory = Memory::new();
        let rom = vec![0xAA; MAX_ROM_SIZE + 1];
        match memory.load(&rom) {
            Err(RomError::TooLarge { size, max }) => {
                assert_eq!(size, 0xE00);
                assert_eq!(max, 0xDFF);
            }
            other => panic!("expected TooLarge, got {:?}", other),
        }
        assert_eq!(memory.read(0x200), 0x00);
    }
}
