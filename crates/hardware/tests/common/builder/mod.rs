//! Instruction word builders.
