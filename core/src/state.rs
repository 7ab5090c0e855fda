use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::{Registers, Stack};
use crate::screen::Screen;
use crate::timers::Timers;

/// Whether the CPU is fetching instructions or suspended on FX0A.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    /// Waiting for any key; the lowest pressed key is written to `register`.
    AwaitingKey { register: u8 },
}

/// The complete Chip-8 machine.
///
/// ## CPU
/// - `registers` V0..VF, I and the program counter
/// - `stack` up to 16 return addresses
/// - `timers` the delay and sound timers
/// - `mode` running or suspended awaiting a keypress
///
/// ## Memory
/// - `memory` 4096 bytes with the sprite sheet at 0x050 and the ROM at 0x200
/// - `screen` the 64x32 frame buffer and its draw flag
///
/// ## Input
/// - `keypad` pressed status of keys 0..F, written by the host
#[derive(Copy, Clone)]
pub struct State {
    pub registers: Registers,
    pub stack: Stack,
    pub timers: Timers,
    pub memory: Memory,
    pub screen: Screen,
    pub keypad: Keypad,
    pub mode: Mode,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            stack: Stack::new(),
            timers: Timers::new(),
            memory: Memory::new(),
            screen: Screen::new(),
            keypad: Keypad::new(),
            mode: Mode::Running,
        }
    }

    /// Fetches the opcode currently pointed at by the pc.
    pub fn fetch(&self) -> u16 {
        let pc = self.registers.pc;
        crate::opcode::from_bytes(self.memory.read(pc), self.memory.read(pc.wrapping_add(1)))
    }

    /// Moves the pc past the next instruction.
    pub fn skip(&mut self) {
        self.registers.pc = self.registers.pc.wrapping_add(2);
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
    fn test_fetch_reads_big_endian_at_pc() {
        let mut state = State::new();
        state.memory.load(&[0xAA, 0xBB]).unwrap();
        assert_eq!(state.fetch(), 0xAABB);
    }

    #[test]
    fn test_fetch_wraps_at_end_of_memory() {
        let mut state = State::new();
        state.memory.write(0xFFF, 0x12);
        state.memory.write(0x000, 0x34);
        state.registers.pc = 0xFFF;
        assert_eq!(state.fetch(), 0x1234);
    }

    #[test]
    fn test_new_state_is_running() {
        assert_eq!(State::new().mode, Mode::Running);
    }
}
