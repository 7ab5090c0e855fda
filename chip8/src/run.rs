use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{info, warn};
use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;

use c8vm_core::{Chip8, Event, TimerMode, TIMER_HZ};
use display::{Beeper, Display};

use crate::keymap::keymap;
use crate::Args;

pub fn run(args: Args) -> Result<()> {
    let rom = args
        .rom
        .canonicalize()
        .with_context(|| format!("unable to resolve ROM path {}", args.rom.display()))?;

    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    }
    .with_timer_mode(args.timers.into());

    // Load ROM
    let file = File::open(&rom).with_context(|| format!("unable to open {}", rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", rom.display()))?;
    info!("loaded ROM {}", rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl, "c8vm", args.scale)?;
    let beeper = if args.muted {
        None
    } else {
        match Beeper::new(&sdl) {
            Ok(beeper) => Some(beeper),
            Err(e) => {
                warn!("continuing without sound: {:#}", e);
                None
            }
        }
    };
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    // Set initial timing
    let cycle_time = Duration::from_nanos(1_000_000_000 / args.clock.max(1));
    let timer_time = Duration::from_nanos(1_000_000_000 / TIMER_HZ);
    let mut last_cycle = Instant::now();
    let mut last_timer_tick = Instant::now();

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame)?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                SdlEvent::Quit { .. } => break 'event,
                SdlEvent::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                SdlEvent::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        chip8.step().context("machine halted")?;
        if chip8.timer_mode() == TimerMode::Host && last_timer_tick.elapsed() >= timer_time {
            chip8.tick_timers();
            last_timer_tick = Instant::now();
        }

        // Unknown opcodes are already logged by the core
        for event in chip8.drain_events() {
            match (event, &beeper) {
                (Event::ToneOn, Some(beeper)) => beeper.start(),
                (Event::ToneOff, Some(beeper)) => beeper.stop(),
                _ => {}
            }
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    if let Some(beeper) = &beeper {
        beeper.stop();
    }
    info!("exiting");
    Ok(())
}
