//! # Statistics Tests
//!
//! Verifies retirement counts, the instruction mix, and fault counters.

use mipsx_core::FaultKind;
use mipsx_core::isa::abi::{REG_T0, REG_T1};
use mipsx_core::stats::SimStats;

use crate::common::builder::instruction::asm;
use crate::common::harness::TestContext;

const T0: i32 = REG_T0 as i32;
const T1: i32 = REG_T1 as i32;

#[test]
fn test_instruction_mix() {
    let mut ctx = TestContext::new();
    let program = [
        asm("li", &[T1, 3]),
        asm("inc", &[T1]),
        asm("inc", &[T1]),
        asm("sqr", &[T0, T1]),
    ];
    assert_eq!(ctx.run(&program), Ok(4));

    let stats = ctx.cpu.stats();
    assert_eq!(stats.instructions_retired, 4);
    assert_eq!(stats.mix.get("inc"), Some(&2));
    assert_eq!(stats.mix.get("li"), Some(&1));
    assert_eq!(stats.mix.get("sqr"), Some(&1));
    assert_eq!(stats.faults(), 0);
}

#[test]
fn test_every_fault_kind_is_counted() {
    let mut stats = SimStats::default();
    stats.record_fault(&FaultKind::UnknownInstruction);
    stats.record_fault(&FaultKind::AmbiguousInstruction(vec!["a", "b"]));
    stats.record_fault(&FaultKind::DivisionByZero);
    stats.record_fault(&FaultKind::DivisionByZero);
    stats.record_fault(&FaultKind::InvalidRegister(40));
    stats.record_fault(&FaultKind::OperandLayout {
        expected: 2,
        got: 1,
    });
    assert_eq!(stats.unknown_instructions, 1);
    assert_eq!(stats.ambiguous_instructions, 1);
    assert_eq!(stats.division_by_zero, 2);
    assert_eq!(stats.invalid_registers, 1);
    assert_eq!(stats.operand_layout, 1);
    assert_eq!(stats.faults(), 6);
}

#[test]
fn test_json_report() {
    let mut stats = SimStats::default();
    stats.record_retired("plus");
    stats.record_fault(&FaultKind::DivisionByZero);
    let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
    assert_eq!(json["instructions_retired"], 1);
    assert_eq!(json["mix"]["plus"], 1);
    assert_eq!(json["division_by_zero"], 1);
}

#[test]
fn test_display_report() {
    let mut stats = SimStats::default();
    stats.record_retired("gcd");
    let report = stats.to_string();
    assert!(report.contains("sim_insts                1"));
    assert!(report.contains("inst.gcd"));
}
