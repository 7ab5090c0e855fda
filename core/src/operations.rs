use rand::{Rng, RngCore};

use crate::constants::{ADDRESS_MASK, FONT_GLYPH_SIZE, FONT_OFFSET};
use crate::error::ExecError;
use crate::instruction::Instruction;
use crate::state::{Mode, State};

/// Executes a single decoded instruction against the state.
///
/// The pc must already point past the instruction, which itself was fetched from `address`.
/// Unknown instructions are a no-op here; reporting them is left to the caller.
/// Stack errors are returned before anything is modified, so the caller can rewind the pc.
pub fn execute(
    instruction: Instruction,
    address: u16,
    state: &mut State,
    rng: &mut dyn RngCore,
) -> Result<(), ExecError> {
    use Instruction::*;

    match instruction {
        Clear => state.screen.clear(),
        Return => rts(state, address)?,
        Jump(nnn) => state.registers.pc = nnn,
        Call(nnn) => call(state, address, nnn)?,
        SkipEqual(x, nn) => {
            let vx = state.registers.v[x as usize];
            skip_if(state, vx == nn)
        }
        SkipNotEqual(x, nn) => {
            let vx = state.registers.v[x as usize];
            skip_if(state, vx != nn)
        }
        SkipRegistersEqual(x, y) => {
            let v = state.registers.v;
            skip_if(state, v[x as usize] == v[y as usize])
        }
        Load(x, nn) => state.registers.v[x as usize] = nn,
        Add(x, nn) => add(state, x, nn),
        Move(x, y) => state.registers.v[x as usize] = state.registers.v[y as usize],
        Or(x, y) => state.registers.v[x as usize] |= state.registers.v[y as usize],
        And(x, y) => state.registers.v[x as usize] &= state.registers.v[y as usize],
        Xor(x, y) => state.registers.v[x as usize] ^= state.registers.v[y as usize],
        AddRegisters(x, y) => addr(state, x, y),
        Sub(x, y) => sub(state, x, y),
        ShiftRight(x) => shr(state, x),
        SubNegated(x, y) => subn(state, x, y),
        ShiftLeft(x) => shl(state, x),
        SkipRegistersNotEqual(x, y) => {
            let v = state.registers.v;
            skip_if(state, v[x as usize] != v[y as usize])
        }
        LoadIndex(nnn) => state.registers.i = nnn,
        JumpOffset(nnn) => {
            state.registers.pc = (nnn + u16::from(state.registers.v[0x0])) & ADDRESS_MASK
        }
        Random(x, nn) => state.registers.v[x as usize] = rng.gen::<u8>() & nn,
        Draw(x, y, n) => draw(state, x, y, n),
        SkipPressed(x) => {
            let pressed = state.keypad.is_pressed(state.registers.v[x as usize]);
            skip_if(state, pressed)
        }
        SkipNotPressed(x) => {
            let pressed = state.keypad.is_pressed(state.registers.v[x as usize]);
            skip_if(state, !pressed)
        }
        ReadDelay(x) => state.registers.v[x as usize] = state.timers.delay,
        WaitKey(x) => keyd(state, x),
        SetDelay(x) => state.timers.delay = state.registers.v[x as usize],
        SetSound(x) => state.timers.sound = state.registers.v[x as usize],
        AddIndex(x) => addi(state, x),
        LoadGlyph(x) => ldspr(state, x),
        StoreBcd(x) => bcd(state, x),
        StoreRegisters(x) => stor(state, x),
        ReadRegisters(x) => read(state, x),
        Unknown(_) => {}
    }
    Ok(())
}

/// if condition then pc += 2
fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.skip();
    }
}

/// PC = STACK.pop()
fn rts(state: &mut State, address: u16) -> Result<(), ExecError> {
    state.registers.pc = state
        .stack
        .pop()
        .ok_or(ExecError::StackUnderflow { address })?;
    Ok(())
}

/// STACK.push(PC); PC = nnn
fn call(state: &mut State, address: u16, nnn: u16) -> Result<(), ExecError> {
    if !state.stack.push(state.registers.pc) {
        return Err(ExecError::StackOverflow { address });
    }
    state.registers.pc = nnn;
    Ok(())
}

/// Vx += nn
/// Add nn to Vx; allow for overflow but implicitly drop it
fn add(state: &mut State, x: u8, nn: u8) {
    let v = &mut state.registers.v[x as usize];
    *v = v.wrapping_add(nn);
}

/// Vx += Vy; VF = overflow
fn addr(state: &mut State, x: u8, y: u8) {
    let v = &mut state.registers.v;
    let (res, over) = v[x as usize].overflowing_add(v[y as usize]);
    v[0xF] = u8::from(over);
    v[x as usize] = res;
}

/// Vx -= Vy; VF = !underflow
fn sub(state: &mut State, x: u8, y: u8) {
    let v = &mut state.registers.v;
    let (res, under) = v[x as usize].overflowing_sub(v[y as usize]);
    v[0xF] = u8::from(!under);
    v[x as usize] = res;
}

/// Vx = Vy - Vx; VF = !underflow
fn subn(state: &mut State, x: u8, y: u8) {
    let v = &mut state.registers.v;
    let (res, under) = v[y as usize].overflowing_sub(v[x as usize]);
    v[0xF] = u8::from(!under);
    v[x as usize] = res;
}

/// Vx >>= 1; VF = lsb
fn shr(state: &mut State, x: u8) {
    let v = &mut state.registers.v;
    let old = v[x as usize];
    v[0xF] = old & 0x1;
    v[x as usize] = old >> 1;
}

/// Vx <<= 1; VF = msb
fn shl(state: &mut State, x: u8) {
    let v = &mut state.registers.v;
    let old = v[x as usize];
    v[0xF] = (old & 0x80) >> 7;
    v[x as usize] = old << 1;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position Vx, Vy with wrapping.
/// Sets VF if any pixels were erased
fn draw(state: &mut State, x: u8, y: u8, n: u8) {
    let i = state.registers.i;
    let sprite: Vec<u8> = (0..u16::from(n))
        .map(|row| state.memory.read(i.wrapping_add(row)))
        .collect();
    let (vx, vy) = (state.registers.v[x as usize], state.registers.v[y as usize]);
    let collision = state.screen.draw_sprite(vx, vy, &sprite);
    state.registers.set_flag(collision);
}

/// Vx = first pressed key, or suspend until there is one
fn keyd(state: &mut State, x: u8) {
    match state.keypad.first_pressed() {
        Some(key) => state.registers.v[x as usize] = key,
        None => state.mode = Mode::AwaitingKey { register: x },
    }
}

/// I += Vx; VF = I overflowed 12 bits
fn addi(state: &mut State, x: u8) {
    let sum = state
        .registers
        .i
        .wrapping_add(u16::from(state.registers.v[x as usize]));
    state.registers.set_flag(sum > ADDRESS_MASK);
    state.registers.i = sum & ADDRESS_MASK;
}

/// I = address of the sprite for hex digit Vx
/// See constants::SPRITE_SHEET
fn ldspr(state: &mut State, x: u8) {
    let digit = u16::from(state.registers.v[x as usize] & 0xF);
    state.registers.i = FONT_OFFSET + digit * FONT_GLYPH_SIZE;
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: u8) {
    let value = state.registers.v[x as usize];
    let i = state.registers.i;
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.memory.write(i.wrapping_add(offset as u16), *digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
fn stor(state: &mut State, x: u8) {
    let i = state.registers.i;
    for reg in 0..=x {
        let value = state.registers.v[reg as usize];
        state.memory.write(i.wrapping_add(u16::from(reg)), value);
    }
}

/// V0..=Vx = mem[I..=I+x]
fn read(state: &mut State, x: u8) {
    let i = state.registers.i;
    for reg in 0..=x {
        state.registers.v[reg as usize] = state.memory.read(i.wrapping_add(u16::from(reg)));
    }
}
