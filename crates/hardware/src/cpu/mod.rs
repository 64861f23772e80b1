//! Simulated core.
//!
//! A [`Cpu`] owns the per-core state (register file, console sink and
//! statistics) and shares a sealed [`InstructionSet`] with other cores. It
//! performs the following:
//! 1. **Step:** Decodes and executes one instruction word.
//! 2. **Run:** Steps a sequence of words, stopping at the first fault.
//! 3. **Reset:** Restores the power-on register state and clears statistics.

/// Console output sinks.
pub mod console;

/// Instruction dispatch and write-back.
pub mod exec;

use std::sync::Arc;

use crate::common::{Fault, RegisterFile};
use crate::config::Config;
use crate::isa::disasm;
use crate::isa::set::InstructionSet;
use crate::stats::SimStats;

pub use console::{BufferConsole, Console, StdoutConsole};

/// One simulated core.
///
/// Execution is single-threaded: one instruction is decoded and executed at
/// a time, and faults propagate synchronously to the caller.
#[derive(Debug)]
pub struct Cpu<C: Console = StdoutConsole> {
    set: Arc<InstructionSet>,
    regs: RegisterFile,
    console: C,
    stats: SimStats,
    trace: bool,
}

impl<C: Console> Cpu<C> {
    /// Creates a core with zeroed registers.
    ///
    /// # Arguments
    ///
    /// * `set` - Sealed instruction set, shareable across cores.
    /// * `config` - Register conventions and tracing options.
    /// * `console` - Sink for text-producing instructions.
    pub fn new(set: Arc<InstructionSet>, config: &Config, console: C) -> Self {
        Self {
            set,
            regs: RegisterFile::with_zero_register(config.registers.zero_register),
            console,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Decodes and executes one instruction word.
    ///
    /// # Errors
    ///
    /// Returns the decode or execute [`Fault`]; no register is modified.
    pub fn step(&mut self, word: u32) -> Result<(), Fault> {
        match self.execute_word(word) {
            Ok(mnemonic) => {
                self.stats.record_retired(mnemonic);
                Ok(())
            }
            Err(fault) => {
                tracing::warn!(%fault, "instruction faulted");
                self.stats.record_fault(&fault.kind);
                Err(fault)
            }
        }
    }

    /// Executes `words` in order.
    ///
    /// # Returns
    ///
    /// The number of instructions retired.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first fault; instructions before it stay retired.
    pub fn run<I>(&mut self, words: I) -> Result<usize, Fault>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut retired = 0;
        for word in words {
            self.step(word)?;
            retired += 1;
        }
        Ok(retired)
    }

    /// Zeroes every register and clears statistics.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.stats = SimStats::default();
    }

    /// The register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable access to the register file, for seeding state.
    pub const fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// The console sink.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console sink.
    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Execution statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The shared instruction set.
    pub fn instruction_set(&self) -> &InstructionSet {
        &self.set
    }

    fn execute_word(&mut self, word: u32) -> Result<&'static str, Fault> {
        let decoded = self.set.decode(word)?;
        let writeback = exec::execute(&decoded, &mut self.regs, &mut self.console)?;
        if self.trace {
            tracing::info!(
                target: "mipsx::trace",
                word,
                asm = %disasm::disassemble(&decoded),
                ?writeback,
                "executed"
            );
        }
        Ok(decoded.mnemonic())
    }
}
