//! Instruction Disassembler.
//!
//! Renders decoded instructions in the assembly syntax used by the
//! instruction catalog (`plus $t0, $t1, $t2`, `addi $t0, $t1, -4`) for
//! instruction tracing and test diagnostics.

use std::fmt::Write;

use crate::isa::abi;
use crate::isa::decode::Decoded;
use crate::isa::set::InstructionSet;

/// Disassembles an already decoded instruction.
///
/// Register operands are printed with their ABI names, immediates in decimal.
pub fn disassemble(decoded: &Decoded<'_>) -> String {
    let mut out = String::from(decoded.mnemonic());
    let fields = decoded.template().operands().iter().zip(&decoded.operands);
    for (n, (field, &value)) in fields.enumerate() {
        out.push_str(if n == 0 { " " } else { ", " });
        if field.role.is_register() {
            match usize::try_from(value) {
                Ok(idx) => out.push_str(abi::name(idx)),
                Err(_) => out.push_str("$?"),
            }
        } else {
            let _ = write!(out, "{value}");
        }
    }
    out
}

/// Decodes and disassembles a raw word.
///
/// Returns `"unknown"` for words that do not decode to a single instruction.
pub fn disassemble_word(set: &InstructionSet, word: u32) -> String {
    set.decode(word)
        .map_or_else(|_| "unknown".to_owned(), |d| disassemble(&d))
}
