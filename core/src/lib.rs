pub use chip8::{Chip8, Event, TimerMode};
pub use constants::{CLOCK_SPEED, TIMER_HZ};
pub use error::{ExecError, RomError};
pub use screen::FrameBuffer;

mod chip8;
pub mod constants;
mod error;
mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
pub mod registers;
pub mod screen;
pub mod state;
pub mod timers;
