/// # Timers
/// Two 8-bit counters that count down to zero and then stop.
/// - the delay timer can be read back by programs
/// - a tone is emitted for as long as the sound timer is non-zero
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decrements both timers by one without going below zero.
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn tone_active(&self) -> bool {
        self.sound > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_decrements_both() {
        let mut timers = Timers { delay: 3, sound: 1 };
        timers.tick();
        assert_eq!(timers, Timers { delay: 2, sound: 0 });
    }

    #[test]
    fn test_timers_stop_at_zero() {
        let mut timers = Timers::new();
        for _ in 0..300 {
            timers.tick();
        }
        assert_eq!(timers, Timers { delay: 0, sound: 0 });
    }

    #[test]
    fn test_tone_active_while_sound_nonzero() {
        let mut timers = Timers { delay: 0, sound: 1 };
        assert!(timers.tone_active());
        timers.tick();
        assert!(!timers.tone_active());
    }
}
