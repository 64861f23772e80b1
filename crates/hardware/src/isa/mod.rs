//! Instruction Set Architecture (ISA) Definitions.
//!
//! Instructions are described declaratively: a [`template::Template`] names
//! the fixed bits of an encoding and the operand fields to extract, and a
//! [`behavior::Behavior`] computes the result. Templates are collected in an
//! [`set::InstructionSetBuilder`] which rejects overlapping encodings, then
//! sealed into an immutable [`set::InstructionSet`] for decoding.
//!
//! # Packages
//!
//! * `mathext`: Math Function Extension (23 integer math instructions).

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Behavior trait and the register view handed to it.
pub mod behavior;

/// Word-to-instruction decoding against a sealed instruction set.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Math Function Extension package.
pub mod mathext;

/// Instruction set builder and sealed registry.
pub mod set;

/// Encoding templates and operand field descriptors.
pub mod template;

pub use self::set::{InstructionSet, InstructionSetBuilder};
pub use self::template::Template;
