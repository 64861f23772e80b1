//! MIPS-style instruction decode and dispatch library.
//!
//! This crate implements the decode/execute core of a 32-bit fixed-width
//! instruction machine with the following:
//! 1. **ISA:** Declarative encoding templates, an overlap-checked instruction
//!    set registry, word decoding and disassembly.
//! 2. **Packages:** The Math Function Extension catalog of 23 instructions.
//! 3. **CPU:** Register file, console output, and all-or-nothing execution of
//!    decoded instructions.
//! 4. **Simulation:** Configuration and execution statistics.
//!
//! # Example
//!
//! ```
//! use mipsx_core::isa::mathext;
//! use mipsx_core::cpu::BufferConsole;
//! use mipsx_core::{Config, Cpu};
//! use std::sync::Arc;
//!
//! let set = Arc::new(mathext::instruction_set().unwrap());
//! let mut cpu = Cpu::new(set, &Config::default(), BufferConsole::new());
//!
//! // li $t1, 5 ; li $t2, 7 ; plus $t0, $t1, $t2 ; print $t0
//! cpu.run([0x2409_0005, 0x240A_0007, 0x012A_4020, 0x7D00_003F]).unwrap();
//! assert_eq!(cpu.console().contents(), "12\n");
//! ```

/// Common types and constants (register file, errors, widths).
pub mod common;
/// Simulator configuration (trace flags, register file options).
pub mod config;
/// CPU core (register state, console, execution).
pub mod cpu;
/// Instruction set (templates, registry, decode, disassembly, packages).
pub mod isa;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Fault raised by decode or execution, tagged with the instruction word.
pub use crate::common::{Fault, FaultKind};
/// Main CPU type; holds the instruction set, register file, console, and stats.
pub use crate::cpu::Cpu;
/// Instruction set registry and its builder.
pub use crate::isa::{InstructionSet, InstructionSetBuilder};
