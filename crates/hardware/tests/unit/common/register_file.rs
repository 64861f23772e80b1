//! # Register File Tests
//!
//! Tests for the 32-entry general-purpose register file.

use mipsx_core::common::{FaultKind, NUM_REGISTERS, RegisterFile};
use mipsx_core::isa::abi;

#[test]
fn test_new_initializes_to_zero() {
    let regs = RegisterFile::new();
    for i in 0..NUM_REGISTERS {
        assert_eq!(regs.read(i), Ok(0));
    }
}

#[test]
fn test_zero_register_ignores_writes() {
    let mut regs = RegisterFile::new();
    for value in [1, -1, i32::MAX, i32::MIN] {
        regs.write(abi::REG_ZERO, value).unwrap();
        assert_eq!(regs.read(abi::REG_ZERO), Ok(0));
    }
}

#[test]
fn test_write_then_read_every_register() {
    let mut regs = RegisterFile::new();
    for i in 1..NUM_REGISTERS {
        let value = -(i as i32) * 1000;
        regs.write(i, value).unwrap();
        assert_eq!(regs.read(i), Ok(value));
    }
}

#[test]
fn test_out_of_range_index_is_invalid_register() {
    let mut regs = RegisterFile::new();
    assert_eq!(regs.read(32), Err(FaultKind::InvalidRegister(32)));
    assert_eq!(regs.write(99, 1), Err(FaultKind::InvalidRegister(99)));
}

#[test]
fn test_without_zero_register_every_register_is_writable() {
    let mut regs = RegisterFile::with_zero_register(None);
    regs.write(0, 7).unwrap();
    assert_eq!(regs.read(0), Ok(7));
    assert_eq!(regs.zero_register(), None);
}

#[test]
fn test_reset_clears_all_registers() {
    let mut regs = RegisterFile::new();
    regs.write(abi::REG_T0, 5).unwrap();
    regs.write(abi::REG_RA, -5).unwrap();
    regs.reset();
    assert_eq!(regs.snapshot(), [0; NUM_REGISTERS]);
}

#[test]
fn test_display_uses_abi_names() {
    let mut regs = RegisterFile::new();
    regs.write(abi::REG_T0, -3).unwrap();
    let dump = regs.to_string();
    assert!(dump.starts_with("$zero"));
    assert!(dump.contains("$t0  =          -3"));
    assert_eq!(dump.lines().count(), NUM_REGISTERS / 2);
}
