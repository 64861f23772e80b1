//! Instruction templates.
//!
//! A template describes one instruction encoding: which bits are fixed
//! (opcode, funct, hardwired zero fields), which bits carry operands, and how
//! each operand is interpreted. Templates are used in two places:
//! - decoding: `word & mask == fixed` selects the template, then operand
//!   fields are extracted in declaration order;
//! - registration: two templates conflict iff some word matches both.

use crate::common::EncodeError;
use crate::common::constants::INSTRUCTION_WIDTH;
use crate::common::error::BuildError;
use crate::isa::decode::{low_mask, sign_extend};

/// Role of an operand within an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandRole {
    /// First source register (`rs`).
    Source,
    /// Second source register (`rt`).
    Target,
    /// Destination register (`rd`, or `rt` for I-format instructions).
    Destination,
    /// Immediate value encoded in the instruction.
    Immediate,
}

impl OperandRole {
    /// Returns `true` if the operand names a register rather than a value.
    pub const fn is_register(self) -> bool {
        !matches!(self, Self::Immediate)
    }

    /// Conventional field name for the role.
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Source => "rs",
            Self::Target => "rt",
            Self::Destination => "rd",
            Self::Immediate => "imm",
        }
    }
}

/// How an extracted field is widened to 32 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Two's-complement sign extension from the field's top bit.
    Sign,
    /// Zero extension.
    Zero,
}

/// One operand slot of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandField {
    /// Field name, used in diagnostics.
    pub name: &'static str,
    /// Bit position of the field's least significant bit.
    pub lsb: u32,
    /// Field width in bits (1-32).
    pub width: u32,
    /// What the field means to the behavior.
    pub role: OperandRole,
    /// Sign or zero extension on extraction.
    pub extension: Extension,
}

impl OperandField {
    /// Creates a register operand field (zero-extended).
    pub const fn register(name: &'static str, lsb: u32, width: u32, role: OperandRole) -> Self {
        Self {
            name,
            lsb,
            width,
            role,
            extension: Extension::Zero,
        }
    }

    /// Creates an immediate operand field with the given extension policy.
    pub const fn immediate(name: &'static str, lsb: u32, width: u32, extension: Extension) -> Self {
        Self {
            name,
            lsb,
            width,
            role: OperandRole::Immediate,
            extension,
        }
    }

    /// Bits of the instruction word occupied by this field.
    #[inline]
    pub const fn word_mask(&self) -> u32 {
        low_mask(self.width) << self.lsb
    }

    /// Extracts and extends the field from an instruction word.
    #[inline]
    pub const fn extract(&self, word: u32) -> i32 {
        let raw = (word >> self.lsb) & low_mask(self.width);
        match self.extension {
            Extension::Sign => sign_extend(raw, self.width),
            Extension::Zero => raw as i32,
        }
    }

    /// Packs `value` into the field's position.
    ///
    /// Returns `None` if extracting the packed bits would not give `value`
    /// back, i.e. the value does not fit the field width and extension policy.
    pub const fn insert(&self, value: i32) -> Option<u32> {
        let raw = (value as u32) & low_mask(self.width);
        let bits = raw << self.lsb;
        if self.extract(bits) == value {
            Some(bits)
        } else {
            None
        }
    }

    const fn is_valid(&self) -> bool {
        self.width > 0 && self.lsb < INSTRUCTION_WIDTH && self.width <= INSTRUCTION_WIDTH - self.lsb
    }
}

/// A registered instruction encoding.
///
/// Immutable once built. Fixed bits outside the mask are always clear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    mnemonic: &'static str,
    mask: u32,
    fixed: u32,
    operands: Vec<OperandField>,
    description: &'static str,
    syntax: &'static str,
}

impl Template {
    /// Creates a template from an explicit mask, fixed bits and operand layout.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::FieldRange`] if an operand field is empty, extends
    /// past bit 31, covers a fixed bit, or overlaps another operand.
    pub fn new(
        mnemonic: &'static str,
        mask: u32,
        fixed: u32,
        operands: Vec<OperandField>,
    ) -> Result<Self, BuildError> {
        let mut used = mask;
        for field in &operands {
            if !field.is_valid() || used & field.word_mask() != 0 {
                return Err(BuildError::FieldRange {
                    mnemonic,
                    name: field.name,
                });
            }
            used |= field.word_mask();
        }
        Ok(Self {
            mnemonic,
            mask,
            fixed: fixed & mask,
            operands,
            description: "",
            syntax: "",
        })
    }

    /// Starts a template from a 32-character encoding pattern.
    ///
    /// The pattern lists bits from 31 down to 0. `0` and `1` are fixed bits;
    /// ASCII letters are wildcards. Letters bound with [`PatternBuilder::register`]
    /// or [`PatternBuilder::immediate`] become operand fields, in call order;
    /// unbound letters are ignored on decode.
    ///
    /// ```
    /// use mipsx_core::isa::template::{OperandRole, Template};
    ///
    /// let t = Template::pattern("plus", "000000ssssstttttfffff00000100000")
    ///     .register('f', OperandRole::Destination)
    ///     .register('s', OperandRole::Source)
    ///     .register('t', OperandRole::Target)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(t.mask(), 0xFC0007FF);
    /// assert_eq!(t.fixed(), 0x0000_0020);
    /// ```
    pub fn pattern(mnemonic: &'static str, pattern: &str) -> PatternBuilder {
        PatternBuilder {
            mnemonic,
            pattern: pattern.to_owned(),
            letters: Vec::new(),
            description: "",
            syntax: "",
        }
    }

    /// Attaches a one-line description.
    #[must_use]
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Attaches an example assembly syntax, e.g. `plus $t0, $t1, $t2`.
    #[must_use]
    pub fn with_syntax(mut self, syntax: &'static str) -> Self {
        self.syntax = syntax;
        self
    }

    /// Instruction mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Bits that must match exactly.
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Required values of the masked bits.
    pub const fn fixed(&self) -> u32 {
        self.fixed
    }

    /// Operand layout in declaration order.
    pub fn operands(&self) -> &[OperandField] {
        &self.operands
    }

    /// One-line description, empty if none was given.
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Example syntax, empty if none was given.
    pub const fn syntax(&self) -> &'static str {
        self.syntax
    }

    /// Checks whether `word` matches this template's fixed bits.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.fixed
    }

    /// Checks whether some word matches both `self` and `other`.
    ///
    /// Only bits fixed by both templates can tell them apart.
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        (self.fixed ^ other.fixed) & self.mask & other.mask == 0
    }

    /// Extracts every operand of `word` in declaration order.
    pub fn extract(&self, word: u32) -> Vec<i32> {
        self.operands.iter().map(|f| f.extract(word)).collect()
    }

    /// Builds the instruction word for the given operand values.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::OperandCount`] on an arity mismatch and
    /// [`EncodeError::OutOfRange`] if a value does not fit its field.
    pub fn encode(&self, operands: &[i32]) -> Result<u32, EncodeError> {
        if operands.len() != self.operands.len() {
            return Err(EncodeError::OperandCount {
                mnemonic: self.mnemonic,
                expected: self.operands.len(),
                got: operands.len(),
            });
        }
        self.operands
            .iter()
            .zip(operands)
            .try_fold(self.fixed, |word, (field, &value)| {
                field
                    .insert(value)
                    .map(|bits| word | bits)
                    .ok_or(EncodeError::OutOfRange {
                        mnemonic: self.mnemonic,
                        name: field.name,
                        value,
                    })
            })
    }
}

/// Fluent builder for pattern-based templates; see [`Template::pattern`].
#[derive(Clone, Debug)]
#[must_use]
pub struct PatternBuilder {
    mnemonic: &'static str,
    pattern: String,
    letters: Vec<(char, OperandRole, Extension)>,
    description: &'static str,
    syntax: &'static str,
}

impl PatternBuilder {
    /// Binds `letter` as a register operand.
    pub fn register(mut self, letter: char, role: OperandRole) -> Self {
        self.letters.push((letter, role, Extension::Zero));
        self
    }

    /// Binds `letter` as an immediate operand.
    pub fn immediate(mut self, letter: char, extension: Extension) -> Self {
        self.letters
            .push((letter, OperandRole::Immediate, extension));
        self
    }

    /// Attaches a one-line description.
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Attaches an example syntax string.
    pub fn syntax(mut self, syntax: &'static str) -> Self {
        self.syntax = syntax;
        self
    }

    /// Parses the pattern and produces the template.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if the pattern is not 32 characters of `0`, `1`
    /// and ASCII letters, or if a bound letter is missing, split, or bound twice.
    pub fn build(self) -> Result<Template, BuildError> {
        let mnemonic = self.mnemonic;
        let len = self.pattern.chars().count();
        if len != INSTRUCTION_WIDTH as usize {
            return Err(BuildError::PatternLength { mnemonic, len });
        }

        let mut mask = 0u32;
        let mut fixed = 0u32;
        for (i, ch) in self.pattern.chars().enumerate() {
            let bit = 1u32 << (INSTRUCTION_WIDTH as usize - 1 - i);
            match ch {
                '0' => mask |= bit,
                '1' => {
                    mask |= bit;
                    fixed |= bit;
                }
                c if c.is_ascii_alphabetic() => {}
                c => return Err(BuildError::PatternChar { mnemonic, ch: c }),
            }
        }

        let mut operands = Vec::with_capacity(self.letters.len());
        for (n, &(letter, role, extension)) in self.letters.iter().enumerate() {
            if self.letters[..n].iter().any(|&(l, _, _)| l == letter) {
                return Err(BuildError::DuplicateField { mnemonic, letter });
            }
            let bits = letter_bits(&self.pattern, letter);
            if bits == 0 {
                return Err(BuildError::MissingField { mnemonic, letter });
            }
            let lsb = bits.trailing_zeros();
            let width = bits.count_ones();
            if bits != low_mask(width) << lsb {
                return Err(BuildError::SplitField { mnemonic, letter });
            }
            operands.push(OperandField {
                name: role.field_name(),
                lsb,
                width,
                role,
                extension,
            });
        }

        Ok(Template::new(mnemonic, mask, fixed, operands)?
            .with_description(self.description)
            .with_syntax(self.syntax))
    }
}

/// Word bits occupied by `letter` in a 32-character pattern.
fn letter_bits(pattern: &str, letter: char) -> u32 {
    pattern
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == letter)
        .fold(0, |acc, (i, _)| {
            acc | 1u32 << (INSTRUCTION_WIDTH as usize - 1 - i)
        })
}
