use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use c8vm_core::{TimerMode, CLOCK_SPEED};

mod keymap;
mod run;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Timers {
    /// Count down once per executed instruction
    PerStep,
    /// Count down at 60Hz regardless of the clock
    SixtyHertz,
}

impl From<Timers> for TimerMode {
    fn from(timers: Timers) -> Self {
        match timers {
            Timers::PerStep => TimerMode::PerStep,
            Timers::SixtyHertz => TimerMode::Host,
        }
    }
}

/// Run a Chip-8 ROM
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to the ROM file to run
    pub rom: PathBuf,

    /// Size of each Chip-8 pixel on screen
    #[arg(long, default_value_t = 10)]
    pub scale: u32,

    /// Instructions executed per second
    #[arg(long, default_value_t = 1_000_000_000 / CLOCK_SPEED)]
    pub clock: u64,

    /// How the delay and sound timers count down
    #[arg(long, value_enum, default_value_t = Timers::PerStep)]
    pub timers: Timers,

    /// Seed for the random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't open an audio device
    #[arg(long)]
    pub muted: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run::run(Args::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["c8vm", "pong.ch8"]).unwrap();
        assert_eq!(args.rom, PathBuf::from("pong.ch8"));
        assert_eq!(args.scale, 10);
        assert_eq!(args.clock, 500);
        assert_eq!(args.timers, Timers::PerStep);
        assert_eq!(args.seed, None);
        assert!(!args.muted);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "c8vm",
            "--timers",
            "sixty-hertz",
            "--seed",
            "7",
            "--muted",
            "pong.ch8",
        ])
        .unwrap();
        assert_eq!(TimerMode::from(args.timers), TimerMode::Host);
        assert_eq!(args.seed, Some(7));
        assert!(args.muted);
    }

    #[test]
    fn test_args_require_rom() {
        assert!(Args::try_parse_from(["c8vm"]).is_err());
    }
}
