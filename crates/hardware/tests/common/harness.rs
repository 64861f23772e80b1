use std::sync::Arc;

use mipsx_core::cpu::BufferConsole;
use mipsx_core::isa::{InstructionSet, mathext};
use mipsx_core::{Config, Cpu, Fault};

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug)]
pub struct TestContext {
    pub cpu: Cpu<BufferConsole>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// A core running the math extension with default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let set = mathext::instruction_set().unwrap();
        Self::with_set(set, config)
    }

    pub fn with_set(set: InstructionSet, config: &Config) -> Self {
        init_tracing();
        Self {
            cpu: Cpu::new(Arc::new(set), config, BufferConsole::new()),
        }
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: i32) {
        self.cpu.regs_mut().write(reg, val).unwrap();
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> i32 {
        self.cpu.regs().read(reg).unwrap()
    }

    pub fn step(&mut self, word: u32) -> Result<(), Fault> {
        self.cpu.step(word)
    }

    pub fn run(&mut self, words: &[u32]) -> Result<usize, Fault> {
        self.cpu.run(words.iter().copied())
    }

    /// Everything printed so far.
    pub fn output(&self) -> &str {
        self.cpu.console().contents()
    }
}
