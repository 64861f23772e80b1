//! MIPS Application Binary Interface (ABI) register names.
//!
//! Maps register indices to the conventional o32 names (`$zero`, `$at`,
//! `$v0`..`$ra`) used in disassembly and register dumps, and back.

/// Register $0 (`$zero`, hardwired to zero).
pub const REG_ZERO: usize = 0;
/// Register $2 (`$v0`, first return value).
pub const REG_V0: usize = 2;
/// Register $4 (`$a0`, first argument).
pub const REG_A0: usize = 4;
/// Register $8 (`$t0`, first temporary).
pub const REG_T0: usize = 8;
/// Register $9 (`$t1`).
pub const REG_T1: usize = 9;
/// Register $10 (`$t2`).
pub const REG_T2: usize = 10;
/// Register $16 (`$s0`, first saved register).
pub const REG_S0: usize = 16;
/// Register $29 (`$sp`, stack pointer).
pub const REG_SP: usize = 29;
/// Register $31 (`$ra`, return address).
pub const REG_RA: usize = 31;

/// ABI register names for $0-$31.
const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name for a register index, or `"$?"` when out of range.
#[inline]
pub fn name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$?")
}

/// Resolves a register name to its index.
///
/// Accepts ABI names (`$t0`), numeric names (`$8`) and `$s8` as an alias of `$fp`.
pub fn index(name: &str) -> Option<usize> {
    if name == "$s8" {
        return Some(30);
    }
    if let Some(idx) = REG_NAMES.iter().position(|n| *n == name) {
        return Some(idx);
    }
    name.strip_prefix('$')
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&idx| idx < REG_NAMES.len())
}
