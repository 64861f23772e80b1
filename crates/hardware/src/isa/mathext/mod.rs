//! Math Function Extension.
//!
//! Twenty-three custom MIPS instructions for enhanced integer math: immediate
//! arithmetic, console printing, two-operand arithmetic and comparison
//! (`plus`..`div`, opcode `000000`), and the `SPECIAL3` group (`sqr`..`log`,
//! opcode `011111`) of powers, series and number-theoretic functions.
//!
//! Encodings use the catalog's letter notation: `f` is the first operand in
//! the assembly syntax (normally the destination), `s` the second, `t` the
//! third and `i` an immediate.

/// Arithmetic kernels.
pub mod ops;

use crate::common::error::BuildError;
use crate::isa::behavior::{Behavior, ExecContext, ExecResult, Writeback, operands};
use crate::isa::set::{InstructionSet, InstructionSetBuilder};
use crate::isa::template::{Extension, OperandRole, Template};

/// Human-readable package name.
pub const NAME: &str = "Math Function Extension Package";

/// Package description.
pub const DESCRIPTION: &str =
    "A language extension for MIPS to perform enhanced mathematical functions.";

/// Encoding patterns, bit 31 first.
pub mod patterns {
    /// `addi rt, rs, imm`.
    pub const ADDI: &str = "001000sssssfffffiiiiiiiiiiiiiiii";
    /// `li rt, imm`.
    pub const LI: &str = "00100100000fffffiiiiiiiiiiiiiiii";
    /// `print rs`.
    pub const PRINT: &str = "011111fffff000000000000000111111";
    /// `plus rd, rs, rt`.
    pub const PLUS: &str = "000000ssssstttttfffff00000100000";
    /// `minus rd, rs, rt`.
    pub const MINUS: &str = "000000ssssstttttfffff00000100010";
    /// `min rd, rs, rt`.
    pub const MIN: &str = "000000ssssstttttfffff00000000001";
    /// `max rd, rs, rt`.
    pub const MAX: &str = "000000ssssstttttfffff00000000010";
    /// `mean rd, rs, rt`.
    pub const MEAN: &str = "000000ssssstttttfffff00000000011";
    /// `mul rd, rs, rt`.
    pub const MUL: &str = "000000ssssstttttfffff00000011000";
    /// `div rd, rs, rt`.
    pub const DIV: &str = "000000ssssstttttfffff00000011010";
    /// `neg rd, rs`.
    pub const NEG: &str = "000000sssss00000fffff00000000100";
    /// `inc rd`.
    pub const INC: &str = "0000000000000000fffff00000000101";
    /// `sqr rd, rs`.
    pub const SQR: &str = "011111sssss00000fffff00000000001";
    /// `sqrt rd, rs`.
    pub const SQRT: &str = "011111sssss00000fffff00000000010";
    /// `pow rd, rs, rt`.
    pub const POW: &str = "011111ssssstttttfffff00000000011";
    /// `sum rd, rs, rt`.
    pub const SUM: &str = "011111ssssstttttfffff00000000100";
    /// `prod rd, rs, rt`.
    pub const PROD: &str = "011111ssssstttttfffff00000000101";
    /// `fact rd, rs`.
    pub const FACT: &str = "011111sssss00000fffff00000000110";
    /// `avg rd, rs, rt`.
    pub const AVG: &str = "011111ssssstttttfffff00000000111";
    /// `abs rd, rs`.
    pub const ABS: &str = "011111sssss00000fffff00000001000";
    /// `hyp rd, rs, rt`.
    pub const HYP: &str = "011111ssssstttttfffff00000001001";
    /// `gcd rd, rs, rt`.
    pub const GCD: &str = "011111ssssstttttfffff00000001010";
    /// `log rd, rs, rt`.
    pub const LOG: &str = "011111ssssstttttfffff00000001011";
}

/// Behavior of `op rd, rs, rt`: `rd = f(rs, rt)`.
struct Binary(fn(i32, i32) -> i32);

impl Behavior for Binary {
    fn execute(&self, ctx: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
        let [rd, rs, rt] = operands::<3>(args)?;
        let value = (self.0)(ctx.read(rs)?, ctx.read(rt)?);
        Ok(Some(Writeback::new(rd, value)))
    }
}

/// Behavior of `op rd, rs`: `rd = f(rs)`.
struct Unary(fn(i32) -> i32);

impl Behavior for Unary {
    fn execute(&self, ctx: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
        let [rd, rs] = operands::<2>(args)?;
        Ok(Some(Writeback::new(rd, (self.0)(ctx.read(rs)?))))
    }
}

fn addi(ctx: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
    let [rt, rs, imm] = operands::<3>(args)?;
    Ok(Some(Writeback::new(rt, ops::plus(ctx.read(rs)?, imm))))
}

fn li(_: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
    let [rt, imm] = operands::<2>(args)?;
    Ok(Some(Writeback::new(rt, imm)))
}

fn print(ctx: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
    let [rs] = operands::<1>(args)?;
    let val = ctx.read(rs)?;
    ctx.print(&format!("{val}\n"));
    Ok(None)
}

fn div(ctx: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
    let [rd, rs, rt] = operands::<3>(args)?;
    let quotient = ops::div(ctx.read(rs)?, ctx.read(rt)?)?;
    Ok(Some(Writeback::new(rd, quotient)))
}

fn inc(ctx: &mut ExecContext<'_>, args: &[i32]) -> ExecResult {
    let [rd] = operands::<1>(args)?;
    Ok(Some(Writeback::new(rd, ops::inc(ctx.read(rd)?))))
}

/// `op rd, rs, rt` template.
fn rrr(
    mnemonic: &'static str,
    pattern: &str,
    description: &'static str,
    syntax: &'static str,
) -> Result<Template, BuildError> {
    Template::pattern(mnemonic, pattern)
        .register('f', OperandRole::Destination)
        .register('s', OperandRole::Source)
        .register('t', OperandRole::Target)
        .describe(description)
        .syntax(syntax)
        .build()
}

/// `op rd, rs` template.
fn rr(
    mnemonic: &'static str,
    pattern: &str,
    description: &'static str,
    syntax: &'static str,
) -> Result<Template, BuildError> {
    Template::pattern(mnemonic, pattern)
        .register('f', OperandRole::Destination)
        .register('s', OperandRole::Source)
        .describe(description)
        .syntax(syntax)
        .build()
}

/// Registers the whole package on `builder`.
///
/// # Errors
///
/// Returns a [`BuildError`] if any instruction overlaps one already registered.
pub fn install(builder: &mut InstructionSetBuilder) -> Result<(), BuildError> {
    use patterns as p;

    let addi_t = Template::pattern("addi", p::ADDI)
        .register('f', OperandRole::Destination)
        .register('s', OperandRole::Source)
        .immediate('i', Extension::Sign)
        .describe("Adds a 16-bit signed immediate to register $rs and stores in $rt.")
        .syntax("addi $t0, $t1, 100")
        .build()?;
    let li_t = Template::pattern("li", p::LI)
        .register('f', OperandRole::Destination)
        .immediate('i', Extension::Zero)
        .describe("Loads a 16-bit immediate value into register $rt.")
        .syntax("li $t0, 100")
        .build()?;
    let print_t = Template::pattern("print", p::PRINT)
        .register('f', OperandRole::Source)
        .describe("Prints the integer value of register $rs to the console.")
        .syntax("print $t0")
        .build()?;
    let inc_t = Template::pattern("inc", p::INC)
        .register('f', OperandRole::Destination)
        .describe("Increments the value in the destination register $rd by 1.")
        .syntax("inc $t0")
        .build()?;

    let _ = builder
        .register(addi_t, addi)?
        .register(li_t, li)?
        .register(print_t, print)?;

    let binary: &[(&'static str, &str, fn(i32, i32) -> i32, &'static str, &'static str)] = &[
        ("plus", p::PLUS, ops::plus, "Adds $rs and $rt, storing the result in $rd.", "plus $t0, $t1, $t2"),
        ("minus", p::MINUS, ops::minus, "Subtracts $rt from $rs, storing the result in $rd.", "minus $t0, $t1, $t2"),
        ("min", p::MIN, ops::min, "Stores the smaller of $rs and $rt in $rd.", "min $t0, $t1, $t2"),
        ("max", p::MAX, ops::max, "Stores the larger of $rs and $rt in $rd.", "max $t0, $t1, $t2"),
        ("mean", p::MEAN, ops::mean, "Stores the truncated average of $rs and $rt in $rd.", "mean $t0, $t1, $t2"),
        ("mul", p::MUL, ops::mul, "Multiplies $rs by $rt and stores the result in $rd.", "mul $t0, $t1, $t2"),
        ("pow", p::POW, ops::pow, "Stores $rs raised to the power $rt in $rd.", "pow $t0, $t1, $t2"),
        ("sum", p::SUM, ops::sum, "Sums all integers from $rs to $rt.", "sum $t0, $t1, $t2"),
        ("prod", p::PROD, ops::prod, "Multiplies all integers from $rs to $rt.", "prod $t0, $t1, $t2"),
        ("avg", p::AVG, ops::avg, "Stores the truncated average of $rs and $rt in $rd.", "avg $t0, $t1, $t2"),
        ("hyp", p::HYP, ops::hyp, "Length of the hypotenuse with sides $rs and $rt.", "hyp $t0, $t1, $t2"),
        ("gcd", p::GCD, ops::gcd, "Greatest common divisor of $rs and $rt.", "gcd $t0, $t1, $t2"),
        ("log", p::LOG, ops::log, "Logarithm of $rs in base $rt.", "log $t0, $t1, $t2"),
    ];
    for &(mnemonic, pattern, f, description, syntax) in binary {
        let template = rrr(mnemonic, pattern, description, syntax)?;
        let _ = builder.register_boxed(template, Box::new(Binary(f)))?;
    }

    let div_t = rrr(
        "div",
        p::DIV,
        "Divides $rs by $rt and stores the integer quotient in $rd.",
        "div $t0, $t1, $t2",
    )?;
    let _ = builder.register(div_t, div)?.register(inc_t, inc)?;

    let unary: &[(&'static str, &str, fn(i32) -> i32, &'static str, &'static str)] = &[
        ("neg", p::NEG, ops::neg, "Flips the sign of $rs and stores the result in $rd.", "neg $t0, $t1"),
        ("sqr", p::SQR, ops::sqr, "Squares $rs and stores the result in $rd.", "sqr $t0, $t1"),
        ("sqrt", p::SQRT, ops::sqrt, "Truncated square root of $rs.", "sqrt $t0, $t1"),
        ("fact", p::FACT, ops::fact, "Factorial of $rs.", "fact $t0, $t1"),
        ("abs", p::ABS, ops::abs, "Absolute value of $rs.", "abs $t0, $t1"),
    ];
    for &(mnemonic, pattern, f, description, syntax) in unary {
        let template = rr(mnemonic, pattern, description, syntax)?;
        let _ = builder.register_boxed(template, Box::new(Unary(f)))?;
    }

    Ok(())
}

/// Builds and seals an instruction set containing only this package.
///
/// # Errors
///
/// Returns a [`BuildError`] if the package's own encodings conflict.
pub fn instruction_set() -> Result<InstructionSet, BuildError> {
    let mut builder = InstructionSetBuilder::new();
    install(&mut builder)?;
    Ok(builder.seal())
}
