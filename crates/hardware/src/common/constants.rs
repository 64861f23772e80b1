//! Global ISA constants.
//!
//! This module defines machine-wide constants shared by the register file, the
//! template layer and the decoder.

/// Number of general-purpose registers in the register file.
pub const NUM_REGISTERS: usize = 32;

/// Index of the MIPS `$zero` register, hardwired to zero by default.
pub const ZERO_REGISTER: usize = 0;

/// Width of every instruction word in bits.
pub const INSTRUCTION_WIDTH: u32 = 32;

/// Number of bits in a register operand field (`rs`, `rt`, `rd`).
pub const REG_FIELD_BITS: u32 = 5;

/// Number of bits in an I-format immediate field.
pub const IMM16_BITS: u32 = 16;
