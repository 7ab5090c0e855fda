use crate::constants::{PROGRAM_START, STACK_DEPTH};

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry, borrow and collision flag
/// - (i) a 16-bit memory address register, only the low 12 bits are meaningful
/// - (pc) a 16-bit program counter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
        }
    }

    /// Sets the flag register VF.
    pub fn set_flag(&mut self, set: bool) {
        self.v[0xF] = u8::from(set);
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// # Stack
/// Holds up to 16 return addresses for nested subroutine calls.
/// `sp` is the number of addresses currently held.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    pub addresses: [u16; STACK_DEPTH],
    pub sp: u8,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            addresses: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    /// Returns false without modifying the stack if it is already full.
    pub fn push(&mut self, address: u16) -> bool {
        match self.addresses.get_mut(self.sp as usize) {
            Some(slot) => {
                *slot = address;
                self.sp += 1;
                true
            }
            None => false,
        }
    }

    pub fn pop(&mut self) -> Option<u16> {
        if self.sp == 0 {
            return None;
        }
        self.sp -= 1;
        Some(self.addresses[self.sp as usize])
    }

    pub fn is_empty(&self) -> bool {
        self.sp == 0
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
