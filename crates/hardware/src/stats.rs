//! Execution statistics.
//!
//! Tracks what a core has executed:
//! 1. **Retirement:** Total instructions that completed without a fault.
//! 2. **Instruction mix:** Retired counts per mnemonic.
//! 3. **Faults:** Counts per fault kind.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::common::FaultKind;

/// Execution statistics for one core.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of instructions that completed without a fault.
    pub instructions_retired: u64,
    /// Retired instruction count per mnemonic.
    pub mix: BTreeMap<&'static str, u64>,
    /// Words that matched no template.
    pub unknown_instructions: u64,
    /// Words that matched several templates.
    pub ambiguous_instructions: u64,
    /// Division-by-zero faults.
    pub division_by_zero: u64,
    /// Out-of-range register operands.
    pub invalid_registers: u64,
    /// Behaviors bound to templates with the wrong operand layout.
    pub operand_layout: u64,
}

impl SimStats {
    /// Records a retired instruction.
    pub fn record_retired(&mut self, mnemonic: &'static str) {
        self.instructions_retired += 1;
        *self.mix.entry(mnemonic).or_insert(0) += 1;
    }

    /// Records a fault.
    pub fn record_fault(&mut self, kind: &FaultKind) {
        let counter = match kind {
            FaultKind::UnknownInstruction => &mut self.unknown_instructions,
            FaultKind::AmbiguousInstruction(_) => &mut self.ambiguous_instructions,
            FaultKind::DivisionByZero => &mut self.division_by_zero,
            FaultKind::InvalidRegister(_) => &mut self.invalid_registers,
            FaultKind::OperandLayout { .. } => &mut self.operand_layout,
        };
        *counter += 1;
    }

    /// Total faults of every kind.
    pub const fn faults(&self) -> u64 {
        self.unknown_instructions
            + self.ambiguous_instructions
            + self.division_by_zero
            + self.invalid_registers
            + self.operand_layout
    }

    /// Serializes the statistics as a JSON object.
    ///
    /// # Errors
    ///
    /// Propagates any `serde_json` serialization error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_faults               {}", self.faults())?;
        for (mnemonic, count) in &self.mix {
            writeln!(f, "  inst.{mnemonic:<18} {count}")?;
        }
        Ok(())
    }
}
