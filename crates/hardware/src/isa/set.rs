//! Instruction set registry.
//!
//! Instructions are registered on an [`InstructionSetBuilder`] before
//! simulation starts. Registration rejects any template that could match a
//! word an existing template matches, so a sealed [`InstructionSet`] decodes
//! every word to at most one instruction. Sealing consumes the builder: the
//! sealed set has no mutation API.

use std::fmt;

use crate::common::error::BuildError;
use crate::common::Fault;
use crate::isa::behavior::{Behavior, ExecContext, ExecResult};
use crate::isa::decode::{self, Decoded};
use crate::isa::template::Template;

/// A template together with its bound behavior.
pub struct Instruction {
    template: Template,
    behavior: Box<dyn Behavior>,
}

impl Instruction {
    /// The instruction's encoding template.
    pub const fn template(&self) -> &Template {
        &self.template
    }

    /// The instruction's behavior.
    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.template.mnemonic())
            .field("mask", &format_args!("{:#010x}", self.template.mask()))
            .field("fixed", &format_args!("{:#010x}", self.template.fixed()))
            .finish_non_exhaustive()
    }
}

/// Registration surface for instruction definitions.
#[derive(Debug, Default)]
pub struct InstructionSetBuilder {
    instructions: Vec<Instruction>,
}

impl InstructionSetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template with a closure behavior.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Overlap`] if the template overlaps a registered
    /// one; the builder is left unchanged.
    pub fn register<F>(&mut self, template: Template, behavior: F) -> Result<&mut Self, BuildError>
    where
        F: Fn(&mut ExecContext<'_>, &[i32]) -> ExecResult + Send + Sync + 'static,
    {
        self.register_boxed(template, Box::new(behavior))
    }

    /// Registers a template with a boxed behavior.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Overlap`] if the template overlaps a registered
    /// one; the builder is left unchanged.
    pub fn register_boxed(
        &mut self,
        template: Template,
        behavior: Box<dyn Behavior>,
    ) -> Result<&mut Self, BuildError> {
        if let Some(existing) = self
            .instructions
            .iter()
            .find(|i| i.template.overlaps(&template))
        {
            return Err(BuildError::Overlap {
                new: template.mnemonic(),
                existing: existing.template.mnemonic(),
            });
        }

        tracing::debug!(
            mnemonic = template.mnemonic(),
            mask = template.mask(),
            fixed = template.fixed(),
            "registered instruction"
        );
        self.instructions.push(Instruction { template, behavior });
        Ok(self)
    }

    /// Number of instructions registered so far.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Freezes the registry into an immutable instruction set.
    pub fn seal(self) -> InstructionSet {
        tracing::debug!(count = self.instructions.len(), "instruction set sealed");
        InstructionSet {
            instructions: self.instructions,
        }
    }
}

/// An immutable, sealed set of instructions.
///
/// Safe to share between cores; each core owns its own register file.
#[derive(Debug)]
pub struct InstructionSet {
    instructions: Vec<Instruction>,
}

impl InstructionSet {
    /// Decodes an instruction word; see [`decode::decode`].
    ///
    /// # Errors
    ///
    /// Returns a [`Fault`] if the word matches no template or more than one.
    pub fn decode(&self, word: u32) -> Result<Decoded<'_>, Fault> {
        decode::decode(self, word)
    }

    /// Looks up an instruction by mnemonic.
    pub fn get(&self, mnemonic: &str) -> Option<&Instruction> {
        self.instructions
            .iter()
            .find(|i| i.template.mnemonic() == mnemonic)
    }

    /// Iterates over the instructions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    /// Number of instructions in the set.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the set has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
