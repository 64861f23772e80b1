//! Fault and build-error definitions.
//!
//! This module defines the error handling for the decode-and-dispatch core. It provides:
//! 1. **Runtime Faults:** Conditions raised by `decode` and `execute`, tagged with the
//!    originating instruction word.
//! 2. **Build Errors:** Template and registry construction failures reported before
//!    simulation starts.
//! 3. **Encode Errors:** Operand values that cannot be packed into a template's fields.

use thiserror::Error;

/// Classification of a runtime fault.
///
/// Behaviors and the register file raise a bare `FaultKind`; the executor attaches
/// the instruction word to produce a [`Fault`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FaultKind {
    /// No registered template matches the instruction word.
    #[error("unknown instruction")]
    UnknownInstruction,

    /// More than one registered template matches the instruction word.
    ///
    /// The associated value lists the mnemonics of every matching template.
    /// A sealed instruction set rejects overlapping templates, so this indicates
    /// a registry construction defect.
    #[error("ambiguous instruction (matches {})", .0.join(", "))]
    AmbiguousInstruction(Vec<&'static str>),

    /// An instruction's divisor operand resolved to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A register operand resolved to an index outside the register file.
    #[error("invalid register index {0}")]
    InvalidRegister(i64),

    /// A behavior was handed a different number of operands than it takes.
    ///
    /// Indicates a behavior bound to a template with the wrong layout.
    #[error("behavior takes {expected} operands, template supplied {got}")]
    OperandLayout {
        /// Operands the behavior destructures.
        expected: usize,
        /// Operands the template declares.
        got: usize,
    },
}

/// A runtime fault raised while decoding or executing one instruction.
///
/// Carries the fault classification and the raw instruction word that caused it.
/// Formatting for end users is left to the host.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at instruction {word:#010x}")]
pub struct Fault {
    /// What went wrong.
    pub kind: FaultKind,
    /// The raw 32-bit instruction word being processed.
    pub word: u32,
}

impl Fault {
    /// Creates a fault for the given instruction word.
    pub const fn new(kind: FaultKind, word: u32) -> Self {
        Self { kind, word }
    }
}

/// Errors raised while building templates or registering them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The encoding pattern is not exactly 32 characters long.
    #[error("pattern for `{mnemonic}` has {len} bits, expected 32")]
    PatternLength {
        /// Mnemonic of the offending template.
        mnemonic: &'static str,
        /// Number of characters found.
        len: usize,
    },

    /// The encoding pattern contains a character that is neither a fixed bit nor a letter.
    #[error("pattern for `{mnemonic}` contains invalid character {ch:?}")]
    PatternChar {
        /// Mnemonic of the offending template.
        mnemonic: &'static str,
        /// The invalid character.
        ch: char,
    },

    /// An operand names a letter that does not appear in the pattern.
    #[error("operand `{letter}` of `{mnemonic}` does not appear in its pattern")]
    MissingField {
        /// Mnemonic of the offending template.
        mnemonic: &'static str,
        /// The operand letter.
        letter: char,
    },

    /// An operand letter occupies non-contiguous bits.
    #[error("operand `{letter}` of `{mnemonic}` is not a contiguous bit range")]
    SplitField {
        /// Mnemonic of the offending template.
        mnemonic: &'static str,
        /// The operand letter.
        letter: char,
    },

    /// An operand letter is declared more than once.
    #[error("operand `{letter}` of `{mnemonic}` is declared twice")]
    DuplicateField {
        /// Mnemonic of the offending template.
        mnemonic: &'static str,
        /// The operand letter.
        letter: char,
    },

    /// An explicit operand field is empty, wider than 32 bits, or covers fixed bits.
    #[error("operand `{name}` of `{mnemonic}` has an invalid bit range")]
    FieldRange {
        /// Mnemonic of the offending template.
        mnemonic: &'static str,
        /// The operand name.
        name: &'static str,
    },

    /// The new template can match a word that an already registered template matches.
    #[error("instruction `{new}` overlaps already registered `{existing}`")]
    Overlap {
        /// Mnemonic being registered.
        new: &'static str,
        /// Mnemonic of the conflicting registered template.
        existing: &'static str,
    },
}

/// Errors raised when packing operand values into an instruction word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The number of supplied operands differs from the template's layout.
    #[error("`{mnemonic}` takes {expected} operands, got {got}")]
    OperandCount {
        /// Mnemonic being encoded.
        mnemonic: &'static str,
        /// Operands declared by the template.
        expected: usize,
        /// Operands supplied by the caller.
        got: usize,
    },

    /// An operand value does not fit its field under the field's extension policy.
    #[error("value {value} does not fit operand `{name}` of `{mnemonic}`")]
    OutOfRange {
        /// Mnemonic being encoded.
        mnemonic: &'static str,
        /// Operand name.
        name: &'static str,
        /// The rejected value.
        value: i32,
    },
}
