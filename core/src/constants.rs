/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Every address an instruction produces is wrapped to 12 bits.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Where ROMs are loaded into memory and where execution begins.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_ROM_SIZE: usize = 0xDFF;

/// Where the built-in hex font lives in memory.
pub const FONT_OFFSET: u16 = 0x050;

/// Each glyph of the font is 5 rows tall.
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Depth of the return-address stack.
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hex keypad.
pub const KEY_COUNT: usize = 16;

/// Nanoseconds per CPU cycle at the default 500Hz clock.
pub const CLOCK_SPEED: u64 = 2_000_000;

/// The delay and sound timers count down at 60Hz on real hardware.
pub const TIMER_HZ: u64 = 60;

/// Events beyond this many that the host hasn't consumed push out the oldest.
pub const MAX_PENDING_EVENTS: usize = 64;

/// # Sprite sheet
/// Sprites for the hex digits 0..F, each 4 pixels wide and 5 pixels tall.
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
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
