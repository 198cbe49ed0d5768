use std::io::Read;
use std::time::Duration;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::clock::Pacer;
use crate::config::{Config, KeyRelease, TimerMode};
use crate::error::Result;
use crate::instruction::from_op;
use crate::opcode::Opcode;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random number source used by `RND`
///  - pacing for instructions and timers
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one cycle at a time or by elapsed wall-clock time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
///
/// Every call runs to completion, so a host may stop calling between any two cycles
/// without leaving the state half-updated.
pub struct Chip8<R: RngCore = StdRng> {
    state: State,
    config: Config,
    rng: R,
    cpu_pacer: Pacer,
    timer_pacer: Pacer,
    cycles_since_tick: u32,
}

impl Chip8<StdRng> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: RngCore> Chip8<R> {
    /// Builds a Chip-8 drawing its random numbers from `rng`
    pub fn with_rng(config: Config, rng: R) -> Self {
        Chip8 {
            state: State::new(),
            config,
            rng,
            cpu_pacer: Pacer::new(config.instructions_per_second),
            timer_pacer: Pacer::new(config.timer_hz),
            cycles_since_tick: 0,
        }
    }

    /// Copies a program image into memory at 0x200
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.state.load_program(program)?;
        debug!("loaded {} byte program", program.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a reader that yields the whole ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn
    /// and marks it as drawn.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.state.keys[(key & 0xF) as usize] = true;
    }

    /// Unset the pressed status of key, or of every key under `KeyRelease::ClearAll`
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        match self.config.key_release {
            KeyRelease::Independent => self.state.keys[(key & 0xF) as usize] = false,
            KeyRelease::ClearAll => self.state.keys = [false; 16],
        }
    }

    /// Replace the whole pressed-key set
    pub fn set_keys(&mut self, keys: [bool; 16]) {
        self.state.keys = keys;
    }

    /// Advances the CPU by a single cycle
    /// - fetches the opcode at the pc and moves the pc past it
    /// - executes it
    /// - with coupled timers, ticks them every `cycles_per_timer_tick` cycles
    pub fn cycle(&mut self) -> Result<()> {
        let address = self.state.pc;
        let result = self.execute_at(address);
        if let Err(ref e) = result {
            warn!("halting at {:03X}: {}", address, e);
        }
        result?;

        if self.config.timer_mode == TimerMode::Coupled {
            self.cycles_since_tick += 1;
            if self.cycles_since_tick >= self.config.cycles_per_timer_tick() {
                self.cycles_since_tick = 0;
                self.tick_timers();
            }
        }
        Ok(())
    }

    fn execute_at(&mut self, address: u16) -> Result<()> {
        let op = Opcode::decode(self.state.fetch());
        let instruction = from_op(&op, address)?;
        trace!(
            "{:03X} {} {:<14} v{:02X?} i{:03X}",
            address,
            op,
            instruction.mnemonic,
            self.state.v,
            self.state.i
        );
        self.state.pc = address.wrapping_add(0x2);
        (instruction.execute)(&op, &mut self.state, &mut self.rng)
    }

    /// Decrements both timers toward zero; the 60Hz beat
    pub fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }

    /// Runs every cycle and timer tick that falls due in `elapsed` wall-clock time.
    ///
    /// Returns how many cycles were executed. Stops at the first error.
    pub fn advance(&mut self, elapsed: Duration) -> Result<usize> {
        let cycles = self.cpu_pacer.due(elapsed);
        for _ in 0..cycles {
            self.cycle()?;
        }

        if self.config.timer_mode == TimerMode::Decoupled {
            for _ in 0..self.timer_pacer.due(elapsed) {
                self.tick_timers();
            }
        }
        Ok(cycles as usize)
    }
}

impl Default for Chip8<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}
