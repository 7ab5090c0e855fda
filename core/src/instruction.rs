use crate::opcode::Opcode;

/// A decoded Chip-8 instruction.
///
/// `x` and `y` are register indices, `nn` an 8-bit constant, `n` a 4-bit constant
/// and `nnn` a 12-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 1NNN
    Jump(u16),
    /// 2NNN
    Call(u16),
    /// 3XNN
    SkipEqual(u8, u8),
    /// 4XNN
    SkipNotEqual(u8, u8),
    /// 5XY0
    SkipRegistersEqual(u8, u8),
    /// 6XNN
    Load(u8, u8),
    /// 7XNN
    Add(u8, u8),
    /// 8XY0
    Move(u8, u8),
    /// 8XY1
    Or(u8, u8),
    /// 8XY2
    And(u8, u8),
    /// 8XY3
    Xor(u8, u8),
    /// 8XY4
    AddRegisters(u8, u8),
    /// 8XY5
    Sub(u8, u8),
    /// 8XY6
    ShiftRight(u8),
    /// 8XY7
    SubNegated(u8, u8),
    /// 8XYE
    ShiftLeft(u8),
    /// 9XY0
    SkipRegistersNotEqual(u8, u8),
    /// ANNN
    LoadIndex(u16),
    /// BNNN
    JumpOffset(u16),
    /// CXNN
    Random(u8, u8),
    /// DXYN
    Draw(u8, u8, u8),
    /// EX9E
    SkipPressed(u8),
    /// EXA1
    SkipNotPressed(u8),
    /// FX07
    ReadDelay(u8),
    /// FX0A
    WaitKey(u8),
    /// FX15
    SetDelay(u8),
    /// FX18
    SetSound(u8),
    /// FX1E
    AddIndex(u8),
    /// FX29
    LoadGlyph(u8),
    /// FX33
    StoreBcd(u8),
    /// FX55
    StoreRegisters(u8),
    /// FX65
    ReadRegisters(u8),
    /// Anything else; executed as a no-op.
    Unknown(u16),
}

/// Selects the Instruction for a given Opcode
pub fn from_op(op: u16) -> Instruction {
    use Instruction::*;

    let (x, y) = (op.x(), op.y());
    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => Clear,
        (0x0, 0x0, 0xE, 0xE) => Return,
        (0x1, ..) => Jump(op.nnn()),
        (0x2, ..) => Call(op.nnn()),
        (0x3, ..) => SkipEqual(x, op.nn()),
        (0x4, ..) => SkipNotEqual(x, op.nn()),
        (0x5, .., 0x0) => SkipRegistersEqual(x, y),
        (0x6, ..) => Load(x, op.nn()),
        (0x7, ..) => Add(x, op.nn()),
        (0x8, .., 0x0) => Move(x, y),
        (0x8, .., 0x1) => Or(x, y),
        (0x8, .., 0x2) => And(x, y),
        (0x8, .., 0x3) => Xor(x, y),
        (0x8, .., 0x4) => AddRegisters(x, y),
        (0x8, .., 0x5) => Sub(x, y),
        (0x8, .., 0x6) => ShiftRight(x),
        (0x8, .., 0x7) => SubNegated(x, y),
        (0x8, .., 0xE) => ShiftLeft(x),
        (0x9, .., 0x0) => SkipRegistersNotEqual(x, y),
        (0xA, ..) => LoadIndex(op.nnn()),
        (0xB, ..) => JumpOffset(op.nnn()),
        (0xC, ..) => Random(x, op.nn()),
        (0xD, ..) => Draw(x, y, op.n()),
        (0xE, .., 0x9, 0xE) => SkipPressed(x),
        (0xE, .., 0xA, 0x1) => SkipNotPressed(x),
        (0xF, .., 0x0, 0x7) => ReadDelay(x),
        (0xF, .., 0x0, 0xA) => WaitKey(x),
        (0xF, .., 0x1, 0x5) => SetDelay(x),
        (0xF, .., 0x1, 0x8) => SetSound(x),
        (0xF, .., 0x1, 0xE) => AddIndex(x),
        (0xF, .., 0x2, 0x9) => LoadGlyph(x),
        (0xF, .., 0x3, 0x3) => StoreBcd(x),
        (0xF, .., 0x5, 0x5) => StoreRegisters(x),
        (0xF, .., 0x6, 0x5) => ReadRegisters(x),
        _ => Unknown(op),
    }
}
