use std::io;

use thiserror::Error;

/// Failures while placing a program into memory.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("unable to read ROM")]
    Read(#[from] io::Error),
}

/// Call/return imbalances detected while executing a cycle.
///
/// `address` is the location of the offending instruction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    #[error("stack overflow: call at {address:#06X} exceeds 16 nested subroutines")]
    StackOverflow { address: u16 },

    #[error("stack underflow: return at {address:#06X} with an empty call stack")]
    StackUnderflow { address: u16 },
}
