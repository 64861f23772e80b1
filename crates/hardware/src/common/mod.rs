//! Common types shared by every component of the core.
//!
//! This module provides the fundamental building blocks of the simulator:
//! 1. **Constants:** Register-file and instruction-width constants.
//! 2. **Error Handling:** Runtime faults, build errors and encode errors.
//! 3. **Register Management:** The general-purpose register file.

/// Machine-wide constants.
pub mod constants;

/// Fault and error definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_REGISTERS, ZERO_REGISTER};
pub use error::{BuildError, EncodeError, Fault, FaultKind};
pub use reg::RegisterFile;
