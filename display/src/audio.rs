use anyhow::Result;
use log::debug;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.25;

/// A square wave at a fixed pitch, filled in by SDL's audio thread.
pub struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a tone for as long as the Chip-8 asks for one.
/// The device starts paused.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self> {
        let audio = sdl.audio().map_err(anyhow::Error::msg)?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio
            .open_playback(None, &desired, |spec| {
                debug!("opened audio device at {}Hz", spec.freq);
                SquareWave {
                    phase_inc: TONE_HZ / spec.freq as f32,
                    phase: 0.0,
                    volume: VOLUME,
                }
            })
            .map_err(anyhow::Error::msg)?;
        Ok(Beeper { device })
    }

    pub fn start(&self) {
        self.device.resume();
    }

    pub fn stop(&self) {
        self.device.pause();
    }
}
