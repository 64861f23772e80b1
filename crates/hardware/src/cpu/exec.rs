//! Instruction dispatch.
//!
//! Invokes the behavior bound to a decoded instruction and commits its
//! write-back. A behavior sees the register file read-only, so a fault
//! raised anywhere in the behavior leaves every register untouched; the
//! single write-back is applied only after the behavior succeeds.

use crate::common::{Fault, FaultKind, RegisterFile};
use crate::cpu::console::Console;
use crate::isa::behavior::{ExecContext, Writeback};
use crate::isa::decode::Decoded;

/// Executes one decoded instruction.
///
/// # Arguments
///
/// * `decoded` - The instruction and its resolved operands.
/// * `regs` - Register file of the executing core.
/// * `console` - Output sink for text-producing instructions.
///
/// # Returns
///
/// The committed write-back, if the instruction produced one.
///
/// # Errors
///
/// Returns the behavior's fault, or [`FaultKind::InvalidRegister`] if the
/// destination operand is outside the register file, tagged with the
/// instruction word.
pub fn execute(
    decoded: &Decoded<'_>,
    regs: &mut RegisterFile,
    console: &mut dyn Console,
) -> Result<Option<Writeback>, Fault> {
    let fault = |kind| Fault::new(kind, decoded.raw);

    let writeback = {
        let mut ctx = ExecContext::new(regs, console);
        decoded
            .instruction
            .behavior()
            .execute(&mut ctx, &decoded.operands)
            .map_err(fault)?
    };

    if let Some(wb) = writeback {
        let idx = usize::try_from(wb.register)
            .map_err(|_| fault(FaultKind::InvalidRegister(wb.register.into())))?;
        regs.write(idx, wb.value).map_err(fault)?;
    }
    Ok(writeback)
}
