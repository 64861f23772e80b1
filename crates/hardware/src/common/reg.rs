//! MIPS General-Purpose Register File.
//!
//! This module implements the integer register file for one simulated core.
//! It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Keeps the configured zero register (`$zero` by
//!    default) hardwired to zero; writes to it are silently dropped.
//! 3. **Bounds Checking:** Reports out-of-range indices as `InvalidRegister`.
//! 4. **Debugging:** Renders the register state with ABI names.

use std::fmt;

use super::constants::{NUM_REGISTERS, ZERO_REGISTER};
use super::error::FaultKind;
use crate::isa::abi;

/// General-purpose register file.
///
/// Contains 32 signed 32-bit registers. When a zero register is configured it
/// always reads as 0 and ignores writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGISTERS],
    zero: Option<usize>,
}

impl RegisterFile {
    /// Creates a register file with all registers zeroed and `$zero` hardwired.
    pub const fn new() -> Self {
        Self::with_zero_register(Some(ZERO_REGISTER))
    }

    /// Creates a register file with an explicit zero-register policy.
    ///
    /// # Arguments
    ///
    /// * `zero` - Index of the hardwired zero register, or `None` for a file in
    ///   which every register is writable. An index outside the file disables
    ///   the policy as well.
    pub const fn with_zero_register(zero: Option<usize>) -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
            zero,
        }
    }

    /// Returns the index of the hardwired zero register, if any.
    pub const fn zero_register(&self) -> Option<usize> {
        self.zero
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). The zero register always returns 0.
    ///
    /// # Errors
    ///
    /// Returns [`FaultKind::InvalidRegister`] if `idx` is out of range.
    pub fn read(&self, idx: usize) -> Result<i32, FaultKind> {
        let val = *self.regs.get(idx).ok_or(FaultKind::InvalidRegister(idx as i64))?;
        Ok(if self.zero == Some(idx) { 0 } else { val })
    }

    /// Writes a register value.
    ///
    /// Writes to the zero register are a silent no-op.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    ///
    /// # Errors
    ///
    /// Returns [`FaultKind::InvalidRegister`] if `idx` is out of range.
    pub fn write(&mut self, idx: usize, val: i32) -> Result<(), FaultKind> {
        let zero = self.zero;
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(FaultKind::InvalidRegister(idx as i64))?;
        if zero != Some(idx) {
            *slot = val;
        }
        Ok(())
    }

    /// Clears every register back to zero, as on simulator restart.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Returns a copy of all register values as seen through `read`.
    pub fn snapshot(&self) -> [i32; NUM_REGISTERS] {
        let mut out = self.regs;
        if let Some(slot) = self.zero.and_then(|z| out.get_mut(z)) {
            *slot = 0;
        }
        out
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    /// Renders registers in pairs, e.g. `$t0  =          5  $t1  =         -3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regs = self.snapshot();
        for (i, pair) in regs.chunks(2).enumerate() {
            let lo = i * 2;
            write!(f, "{:<5}= {:>11}", abi::name(lo), pair[0])?;
            if let Some(hi_val) = pair.get(1) {
                write!(f, "  {:<5}= {:>11}", abi::name(lo + 1), hi_val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
