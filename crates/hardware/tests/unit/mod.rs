//! # Unit Components
//!
//! This module serves as the central hub for the unit tests, organized the way
//! the crate is: shared types, the instruction set layer, the executing core,
//! configuration, and statistics.



/// Unit tests for the executing core.
pub mod cpu;


/// Unit tests for execution statistics.
pub mod stats;
