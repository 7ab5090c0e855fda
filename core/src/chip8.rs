use std::collections::VecDeque;
use std::io::Read;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::{KEY_COUNT, MAX_PENDING_EVENTS, MAX_ROM_SIZE};
use crate::error::{ExecError, RomError};
use crate::instruction::{self, Instruction};
use crate::operations;
use crate::screen::FrameBuffer;
use crate::state::{Mode, State};

/// When the delay and sound timers count down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerMode {
    /// Once at the end of every `step`.
    PerStep,
    /// Only when the host calls `tick_timers`, ideally at 60Hz.
    Host,
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::PerStep
    }
}

/// Things the host may want to react to, collected during `step` and `tick_timers`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The sound timer became non-zero; a tone should play.
    ToneOn,
    /// The sound timer reached zero; the tone should stop.
    ToneOff,
    /// No instruction matched `opcode`; it was skipped.
    UnknownOpcode { address: u16, opcode: u16 },
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random source used by CXNN
///  - `events` not yet consumed by the host
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU and its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8<R = StdRng> {
    state: State,
    rng: R,
    timer_mode: TimerMode,
    events: VecDeque<Event>,
}

impl Chip8<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A machine whose random numbers are reproducible across runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Chip8<R> {
    pub fn with_rng(rng: R) -> Self {
        Chip8 {
            state: State::new(),
            rng,
            timer_mode: TimerMode::default(),
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        }
    }

    pub fn with_timer_mode(mut self, timer_mode: TimerMode) -> Self {
        self.timer_mode = timer_mode;
        self
    }

    pub fn timer_mode(&self) -> TimerMode {
        self.timer_mode
    }

    /// Load a rom into a freshly constructed machine
    ///
    /// # Arguments
    /// * `rom` the raw program bytes
    pub fn load(&mut self, rom: &[u8]) -> Result<(), RomError> {
        self.state.memory.load(rom)
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), RomError> {
        let mut rom = Vec::new();
        // One byte more than fits, so oversized ROMs are still reported as such.
        reader
            .take(MAX_ROM_SIZE as u64 + 1)
            .read_to_end(&mut rom)?;
        self.load(&rom)
    }

    /// Advances the CPU by a single cycle
    /// - if awaiting a keypress, polls the keypad instead of fetching
    /// - otherwise fetches, decodes and executes the next opcode
    /// - counts the timers down when in `TimerMode::PerStep`
    pub fn step(&mut self) -> Result<(), ExecError> {
        let tone_was_active = self.state.timers.tone_active();

        match self.state.mode {
            Mode::Running => self.cycle()?,
            Mode::AwaitingKey { register } => self.poll_key(register),
        }
        self.report_tone(tone_was_active);

        if self.timer_mode == TimerMode::PerStep {
            self.tick_timers();
        }
        Ok(())
    }

    /// Counts the timers down once; for hosts driving them at 60Hz.
    pub fn tick_timers(&mut self) {
        let tone_was_active = self.state.timers.tone_active();
        self.state.timers.tick();
        self.report_tone(tone_was_active);
    }

    fn cycle(&mut self) -> Result<(), ExecError> {
        let address = self.state.registers.pc;
        let op = self.state.fetch();
        let instruction = instruction::from_op(op);
        trace!(
            "{:#05X} {:04X} {:?} v{:02X?} i{:04X}",
            address,
            op,
            instruction,
            self.state.registers.v,
            self.state.registers.i
        );

        self.state.skip();
        if let Instruction::Unknown(opcode) = instruction {
            warn!("unknown opcode {:04X} at {:#05X}, skipping", opcode, address);
            self.push_event(Event::UnknownOpcode { address, opcode });
        }
        if let Err(e) =
            operations::execute(instruction, address, &mut self.state, &mut self.rng)
        {
            // Leave the machine at the faulting instruction.
            self.state.registers.pc = address;
            return Err(e);
        }

        if let Mode::AwaitingKey { register } = self.state.mode {
            debug!("awaiting a keypress for V{:X}", register);
        }
        Ok(())
    }

    fn poll_key(&mut self, register: u8) {
        if let Some(key) = self.state.keypad.first_pressed() {
            debug!("key {:X} pressed, stored in V{:X}", key, register);
            self.state.registers.v[register as usize] = key;
            self.state.mode = Mode::Running;
        }
    }

    fn report_tone(&mut self, was_active: bool) {
        match (was_active, self.state.timers.tone_active()) {
            (false, true) => self.push_event(Event::ToneOn),
            (true, false) => self.push_event(Event::ToneOff),
            _ => {}
        }
    }

    /// Queues an event, dropping the oldest one if the host isn't keeping up.
    fn push_event(&mut self, event: Event) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Takes the oldest event not yet seen by the host.
    pub fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Takes every pending event, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }

    /// The current contents of the display.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.state.screen.frame_buffer
    }

    /// Returns whether the display changed since the last call, and resets that.
    pub fn take_dirty(&mut self) -> bool {
        self.state.screen.take_dirty()
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.take_dirty() {
            Some(self.state.screen.frame_buffer)
        } else {
            None
        }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index of the key 0x0..=0xF
    /// * `pressed` whether it is held down
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        if key as usize >= KEY_COUNT {
            warn!("ignoring key {:#04X}, keys range from 0x0 to 0xF", key);
            return;
        }
        self.state.keypad.set(key, pressed);
    }

    pub fn key_press(&mut self, key: u8) {
        self.set_key(key, true);
    }

    pub fn key_release(&mut self, key: u8) {
        self.set_key(key, false);
    }

    pub fn is_awaiting_key(&self) -> bool {
        self.state.mode != Mode::Running
    }

    /// A read-only view of the whole machine.
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}
