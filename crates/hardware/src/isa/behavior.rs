//! Instruction behaviors.
//!
//! A behavior is the executable half of an instruction definition. It reads
//! register values through a read-only [`ExecContext`], computes a result and
//! reports at most one register write-back; the executor commits that write
//! only after the behavior returns successfully. Behaviors hold no state
//! between invocations.

use std::fmt;

use crate::common::{FaultKind, RegisterFile};
use crate::cpu::console::Console;

/// A register write requested by a behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Writeback {
    /// Destination register operand, as resolved by the decoder.
    pub register: i32,
    /// Value to store.
    pub value: i32,
}

impl Writeback {
    /// Creates a write-back of `value` into `register`.
    pub const fn new(register: i32, value: i32) -> Self {
        Self { register, value }
    }
}

/// Outcome of one behavior invocation.
pub type ExecResult = Result<Option<Writeback>, FaultKind>;

/// Destructures decoded operands into a fixed arity.
///
/// # Errors
///
/// Returns [`FaultKind::OperandLayout`] if `operands` does not hold exactly `N` values.
pub fn operands<const N: usize>(operands: &[i32]) -> Result<[i32; N], FaultKind> {
    <[i32; N]>::try_from(operands).map_err(|_| FaultKind::OperandLayout {
        expected: N,
        got: operands.len(),
    })
}

/// Execution environment handed to a behavior.
///
/// Register access is read-only; results leave the behavior as a [`Writeback`].
pub struct ExecContext<'a> {
    regs: &'a RegisterFile,
    console: &'a mut dyn Console,
}

impl<'a> ExecContext<'a> {
    /// Creates a context over a register file and console sink.
    pub fn new(regs: &'a RegisterFile, console: &'a mut dyn Console) -> Self {
        Self { regs, console }
    }

    /// Reads the register named by a decoded operand value.
    ///
    /// # Errors
    ///
    /// Returns [`FaultKind::InvalidRegister`] for negative or out-of-range operands.
    pub fn read(&self, operand: i32) -> Result<i32, FaultKind> {
        let idx = usize::try_from(operand).map_err(|_| FaultKind::InvalidRegister(operand.into()))?;
        self.regs.read(idx)
    }

    /// Writes text to the console sink.
    pub fn print(&mut self, text: &str) {
        self.console.write_str(text);
    }
}

impl fmt::Debug for ExecContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecContext")
            .field("regs", &self.regs)
            .finish_non_exhaustive()
    }
}

/// Executable semantics bound to an instruction template.
///
/// Any `Fn(&mut ExecContext<'_>, &[i32]) -> ExecResult` closure is a behavior.
pub trait Behavior: Send + Sync {
    /// Runs the instruction.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Read-only register view and console.
    /// * `operands` - Decoded operand values in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a [`FaultKind`] if the instruction cannot complete; no register
    /// write takes effect in that case.
    fn execute(&self, ctx: &mut ExecContext<'_>, operands: &[i32]) -> ExecResult;
}

impl<F> Behavior for F
where
    F: Fn(&mut ExecContext<'_>, &[i32]) -> ExecResult + Send + Sync,
{
    fn execute(&self, ctx: &mut ExecContext<'_>, operands: &[i32]) -> ExecResult {
        self(ctx, operands)
    }
}
