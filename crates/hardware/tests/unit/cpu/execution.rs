//! # Execution Tests
//!
//! Verifies that faults leave the register file untouched and that register
//! operands are validated at read and write-back.

use std::sync::Arc;

use mipsx_core::common::BuildError;
use mipsx_core::cpu::exec;
use mipsx_core::cpu::BufferConsole;
use mipsx_core::isa::abi::{REG_T0, REG_T1, REG_T2, REG_ZERO};
use mipsx_core::isa::behavior::{ExecContext, ExecResult, Writeback, operands};
use mipsx_core::isa::template::{OperandRole, Template};
use mipsx_core::isa::{InstructionSet, InstructionSetBuilder, mathext};
use mipsx_core::common::RegisterFile;
use mipsx_core::{Config, Fault, FaultKind};

use crate::common::builder::instruction::asm;
use crate::common::harness::TestContext;

const T0: i32 = REG_T0 as i32;
const T1: i32 = REG_T1 as i32;
const T2: i32 = REG_T2 as i32;

/// Opcode `111111` is unused by the math extension.
const WIDE_WRITE: &str = "11111100000000000000000000dddddd";
const WIDE_READ: &str = "11111100000000000000000001ssssss";

fn write_one(_: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
    let [rd] = operands::<1>(args)?;
    Ok(Some(Writeback::new(rd, 1)))
}

fn read_only(ctx: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
    let [rs] = operands::<1>(args)?;
    let _ = ctx.read(rs)?;
    Ok(None)
}

/// Math extension plus two instructions with 6-bit register fields.
fn wide_set() -> Result<InstructionSet, BuildError> {
    let mut builder = InstructionSetBuilder::new();
    mathext::install(&mut builder)?;
    let write = Template::pattern("wide.w", WIDE_WRITE)
        .register('d', OperandRole::Destination)
        .build()?;
    let read = Template::pattern("wide.r", WIDE_READ)
        .register('s', OperandRole::Source)
        .build()?;
    let _ = builder.register(write, write_one)?.register(read, read_only)?;
    Ok(builder.seal())
}

#[test]
fn test_plus_scenario() {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_T1, 5);
    ctx.set_reg(REG_T2, 7);
    ctx.step(asm("plus", &[T0, T1, T2])).unwrap();
    assert_eq!(ctx.get_reg(REG_T0), 12);
    assert_eq!(ctx.cpu.stats().instructions_retired, 1);
}

#[test]
fn test_division_by_zero_leaves_destination_unchanged() {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_T0, 99);
    ctx.set_reg(REG_T1, 10);
    let before = ctx.cpu.regs().snapshot();

    let word = asm("div", &[T0, T1, T2]);
    let fault = ctx.step(word).unwrap_err();

    assert_eq!(fault, Fault::new(FaultKind::DivisionByZero, word));
    assert_eq!(ctx.cpu.regs().snapshot(), before);
    assert_eq!(ctx.cpu.stats().division_by_zero, 1);
    assert_eq!(ctx.cpu.stats().instructions_retired, 0);
}

#[test]
fn test_unknown_instruction_faults_with_word() {
    let mut ctx = TestContext::new();
    let fault = ctx.step(0xFFFF_FFFF).unwrap_err();
    assert_eq!(fault, Fault::new(FaultKind::UnknownInstruction, 0xFFFF_FFFF));
    assert_eq!(ctx.cpu.stats().unknown_instructions, 1);
}

#[test]
fn test_writes_to_zero_register_are_discarded() {
    let mut ctx = TestContext::new();
    ctx.set_reg(REG_T1, 5);
    ctx.set_reg(REG_T2, 7);
    ctx.step(asm("plus", &[REG_ZERO as i32, T1, T2])).unwrap();
    assert_eq!(ctx.get_reg(REG_ZERO), 0);
    assert_eq!(ctx.cpu.stats().instructions_retired, 1);
}

#[test]
fn test_zero_register_can_be_disabled() {
    let config = Config::from_json(r#"{ "registers": { "zero_register": null } }"#).unwrap();
    let mut ctx = TestContext::with_config(&config);
    ctx.step(asm("li", &[REG_ZERO as i32, 3])).unwrap();
    assert_eq!(ctx.get_reg(REG_ZERO), 3);
}

#[test]
fn test_out_of_range_destination_is_invalid_register() {
    let mut ctx = TestContext::with_set(wide_set().unwrap(), &Config::default());
    let before = ctx.cpu.regs().snapshot();

    let word = 0xFC00_0028; // wide.w $40
    let fault = ctx.step(word).unwrap_err();

    assert_eq!(fault, Fault::new(FaultKind::InvalidRegister(40), word));
    assert_eq!(ctx.cpu.regs().snapshot(), before);
    assert_eq!(ctx.cpu.stats().invalid_registers, 1);
}

#[test]
fn test_out_of_range_source_is_invalid_register() {
    let mut ctx = TestContext::with_set(wide_set().unwrap(), &Config::default());
    let word = 0xFC00_0070; // wide.r $48
    assert_eq!(
        ctx.step(word).unwrap_err().kind,
        FaultKind::InvalidRegister(48)
    );
}

#[test]
fn test_in_range_wide_register_executes() {
    let mut ctx = TestContext::with_set(wide_set().unwrap(), &Config::default());
    ctx.step(0xFC00_0000 | REG_T0 as u32).unwrap();
    assert_eq!(ctx.get_reg(REG_T0), 1);
}

#[test]
fn test_operand_layout_mismatch_is_reported() {
    let mut builder = InstructionSetBuilder::new();
    // Three-operand behavior bound to a one-operand template.
    let t = Template::pattern("bad", WIDE_WRITE)
        .register('d', OperandRole::Destination)
        .build()
        .unwrap();
    let _ = builder
        .register(t, |_: &mut ExecContext<'_>, args: &[i32]| -> ExecResult {
            let [_, _, _] = operands::<3>(args)?;
            Ok(None)
        })
        .unwrap();
    let mut ctx = TestContext::with_set(builder.seal(), &Config::default());
    assert_eq!(
        ctx.step(0xFC00_0001).unwrap_err().kind,
        FaultKind::OperandLayout {
            expected: 3,
            got: 1
        }
    );
    assert_eq!(ctx.cpu.stats().operand_layout, 1);
}

#[test]
fn test_run_stops_at_first_fault() {
    let mut ctx = TestContext::new();
    let program = [
        asm("li", &[T1, 10]),
        asm("li", &[T2, 0]),
        asm("div", &[T0, T1, T2]),
        asm("li", &[T0, 1]),
    ];
    let fault = ctx.run(&program).unwrap_err();
    assert_eq!(fault.word, program[2]);
    assert_eq!(ctx.get_reg(REG_T1), 10);
    assert_eq!(ctx.get_reg(REG_T0), 0);
    assert_eq!(ctx.cpu.stats().instructions_retired, 2);
}

#[test]
fn test_run_returns_retired_count() {
    let mut ctx = TestContext::new();
    let program = [
        asm("li", &[T1, 5]),
        asm("fact", &[T0, T1]),
        asm("print", &[T0]),
    ];
    assert_eq!(ctx.run(&program), Ok(3));
    assert_eq!(ctx.output(), "120\n");
}

#[test]
fn test_reset_clears_registers_and_stats() {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.run(&[asm("li", &[T0, 9]), asm("inc", &[T0])]), Ok(2));
    ctx.cpu.reset();
    assert_eq!(ctx.get_reg(REG_T0), 0);
    assert_eq!(ctx.cpu.stats().instructions_retired, 0);
}

#[test]
fn test_execute_returns_committed_writeback() {
    let set = mathext::instruction_set().unwrap();
    let mut regs = RegisterFile::new();
    regs.write(REG_T1, 3).unwrap();
    let mut console = BufferConsole::new();

    let decoded = set.decode(asm("sqr", &[T0, T1])).unwrap();
    let wb = exec::execute(&decoded, &mut regs, &mut console).unwrap();
    assert_eq!(wb, Some(Writeback::new(T0, 9)));
    assert_eq!(regs.read(REG_T0), Ok(9));

    let decoded = set.decode(asm("print", &[T0])).unwrap();
    assert_eq!(exec::execute(&decoded, &mut regs, &mut console), Ok(None));
    assert_eq!(console.contents(), "9\n");
}

#[test]
fn test_cores_share_one_instruction_set() {
    let set = Arc::new(mathext::instruction_set().unwrap());
    let config = Config::default();
    let mut a = mipsx_core::Cpu::new(Arc::clone(&set), &config, BufferConsole::new());
    let mut b = mipsx_core::Cpu::new(Arc::clone(&set), &config, BufferConsole::new());
    a.step(asm("li", &[T0, 1])).unwrap();
    b.step(asm("li", &[T0, 2])).unwrap();
    assert_eq!(a.regs().read(REG_T0), Ok(1));
    assert_eq!(b.regs().read(REG_T0), Ok(2));
    assert_eq!(a.instruction_set().len(), 23);
}

#[test]
fn test_tracing_enabled_core_executes() {
    let config = Config::from_json(r#"{ "general": { "trace_instructions": true } }"#).unwrap();
    let mut ctx = TestContext::with_config(&config);
    ctx.set_reg(REG_T1, 4);
    ctx.step(asm("sqr", &[T0, T1])).unwrap();
    assert_eq!(ctx.get_reg(REG_T0), 16);
}
