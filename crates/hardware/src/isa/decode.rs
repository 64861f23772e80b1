//! Instruction Decoder.
//!
//! This module matches 32-bit instruction words against the templates of a
//! sealed [`InstructionSet`] and resolves operand fields. A word decodes only
//! if exactly one template's fixed bits match it; each operand field is then
//! extracted by shift-and-mask and sign- or zero-extended per its declared
//! policy.

use std::fmt;

use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::{Fault, FaultKind};
use crate::isa::set::{Instruction, InstructionSet};
use crate::isa::template::Template;

/// An instruction word matched against its template.
///
/// Created per decode and consumed by one dispatch.
pub struct Decoded<'s> {
    /// The raw instruction word.
    pub raw: u32,
    /// The matched instruction (template and behavior).
    pub instruction: &'s Instruction,
    /// Operand values in the template's declaration order.
    pub operands: Vec<i32>,
}

impl Decoded<'_> {
    /// The matched template.
    pub fn template(&self) -> &Template {
        self.instruction.template()
    }

    /// The matched mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        self.instruction.template().mnemonic()
    }
}

impl fmt::Debug for Decoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoded")
            .field("raw", &format_args!("{:#010x}", self.raw))
            .field("mnemonic", &self.mnemonic())
            .field("operands", &self.operands)
            .finish()
    }
}

/// Decodes an instruction word against a sealed instruction set.
///
/// # Arguments
///
/// * `set` - The instruction set to match against.
/// * `word` - The 32-bit instruction encoding.
///
/// # Errors
///
/// * [`FaultKind::UnknownInstruction`] if no template matches.
/// * [`FaultKind::AmbiguousInstruction`] if more than one template matches.
pub fn decode(set: &InstructionSet, word: u32) -> Result<Decoded<'_>, Fault> {
    let mut hits = set.iter().filter(|i| i.template().matches(word));
    let first = hits
        .next()
        .ok_or_else(|| Fault::new(FaultKind::UnknownInstruction, word))?;

    let others: Vec<&Instruction> = hits.collect();
    if !others.is_empty() {
        let names = std::iter::once(first)
            .chain(others)
            .map(|i| i.template().mnemonic())
            .collect();
        return Err(Fault::new(FaultKind::AmbiguousInstruction(names), word));
    }

    Ok(Decoded {
        raw: word,
        instruction: first,
        operands: first.template().extract(word),
    })
}

/// Mask of the low `bits` bits of a word (`bits` in 0-32).
#[inline]
pub const fn low_mask(bits: u32) -> u32 {
    if bits >= INSTRUCTION_WIDTH {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val` (1-32).
#[inline]
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (val as i32) << shift >> shift
}
