use crate::constants::{DEFAULT_INSTRUCTIONS_PER_SECOND, TIMER_HZ};

/// How the delay and sound timers are paced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    /// Timers follow wall-clock time at `timer_hz`, whatever the instruction rate.
    Decoupled,
    /// Timers tick once every `instructions_per_second / timer_hz` executed cycles.
    /// Emulated time stretches and shrinks with the host's pacing.
    Coupled,
}

/// What releasing a key does to the pressed-key set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRelease {
    /// Only the released key is cleared.
    Independent,
    /// Any release clears every key.
    ClearAll,
}

/// Host-supplied knobs for a `Chip8`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub instructions_per_second: u32,
    pub timer_hz: u32,
    pub timer_mode: TimerMode,
    pub key_release: KeyRelease,
}

impl Config {
    /// Executed cycles between timer ticks when the timers are coupled to execution
    pub fn cycles_per_timer_tick(&self) -> u32 {
        (self.instructions_per_second / self.timer_hz.max(1)).max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            instructions_per_second: DEFAULT_INSTRUCTIONS_PER_SECOND,
            timer_hz: TIMER_HZ,
            timer_mode: TimerMode::Decoupled,
            key_release: KeyRelease::Independent,
        }
    }
}
