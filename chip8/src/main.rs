use std::path::PathBuf;

use clap::Parser;

use vm8_core::constants::DEFAULT_INSTRUCTIONS_PER_SECOND;
use vm8_core::{Config, KeyRelease, TimerMode};

mod keymap;
mod run;

/// Runs a Chip-8 program in an SDL2 window
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(long, default_value_t = DEFAULT_INSTRUCTIONS_PER_SECOND)]
    ips: u32,

    /// Size multiplier for each pixel
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Extra milliseconds to sleep every frame
    #[arg(short, long, default_value_t = 0)]
    delay: u64,

    /// Tick the timers every ips/60 instructions instead of 60 times a wall-clock second
    #[arg(long)]
    coupled_timers: bool,

    /// Releasing any key releases every key
    #[arg(long)]
    clear_keys_on_release: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            instructions_per_second: self.ips,
            timer_mode: if self.coupled_timers {
                TimerMode::Coupled
            } else {
                TimerMode::Decoupled
            },
            key_release: if self.clear_keys_on_release {
                KeyRelease::ClearAll
            } else {
                KeyRelease::Independent
            },
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    run::run(&args.rom, args.config(), args.scale, args.delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["vm8", "pong.ch8"]);
        assert_eq!(args.rom, PathBuf::from("pong.ch8"));
        assert_eq!(args.scale, 10);
        assert_eq!(args.config(), Config::default());
    }

    #[test]
    fn test_flags_reach_config() {
        let args = Args::parse_from([
            "vm8",
            "--ips",
            "480",
            "--coupled-timers",
            "--clear-keys-on-release",
            "pong.ch8",
        ]);
        let config = args.config();
        assert_eq!(config.instructions_per_second, 480);
        assert_eq!(config.timer_mode, TimerMode::Coupled);
        assert_eq!(config.key_release, KeyRelease::ClearAll);
        assert_eq!(config.cycles_per_timer_tick(), 8);
    }
}
