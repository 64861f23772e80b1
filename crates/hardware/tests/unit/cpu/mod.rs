//! Core execution tests.

/// Step/run semantics, fault atomicity, and register validation.
pub mod execution;
