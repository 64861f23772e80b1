//! Configuration for the decode-and-dispatch core.
//!
//! This module defines the configuration structures used to parameterize a
//! simulated core. It provides:
//! 1. **Defaults:** Baseline register-file conventions.
//! 2. **Structures:** General (tracing) and register-file settings.
//!
//! Configuration is supplied as JSON by the host, or use `Config::default()`.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// MIPS `$zero` is hardwired to zero.
    pub const ZERO_REGISTER: Option<usize> = Some(crate::common::ZERO_REGISTER);
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsx_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.registers.zero_register, Some(0));
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mipsx_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "registers": { "zero_register": null }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.registers.zero_register, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings.
    pub general: GeneralConfig,
    /// Register-file conventions.
    pub registers: RegisterConfig,
}

impl Config {
    /// Parses a configuration from JSON; missing sections take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input or unknown enum values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a `tracing` event with the disassembly of every executed instruction.
    pub trace_instructions: bool,
}

/// Register-file settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Index of the hardwired zero register; `null` makes every register writable.
    pub zero_register: Option<usize>,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            zero_register: defaults::ZERO_REGISTER,
        }
    }
}
