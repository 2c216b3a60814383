//! Operand parsing and console formatting for the `alu` binary.

use std::fmt::Write as _;

use alu8_core::isa::Category;
use alu8_core::{AluOutput, Operation, Width};
use anyhow::{Context, Result};
use clap::ValueEnum;

const BANNER: usize = 70;

/// How operands are written on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputRadix {
    /// `0x`/`0b` prefix selects the radix, otherwise decimal.
    Auto,
    /// Hexadecimal, with or without `0x`.
    Hex,
    /// Binary, with or without `0b`.
    Binary,
}

/// How values are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ValueFormat {
    /// Right-aligned decimal.
    #[default]
    Decimal,
    /// `0x`-prefixed, zero-padded hex.
    Hex,
    /// `0b`-prefixed, zero-padded binary.
    Binary,
    /// Decimal followed by hex and binary.
    All,
}

/// Parses an operand. Range checking is left to the caller.
pub fn parse_operand(raw: &str, radix: InputRadix) -> Result<i64> {
    let text = raw.trim();
    let (digits, base) = match radix {
        InputRadix::Hex => (strip_prefix(text, "0x"), 16),
        InputRadix::Binary => (strip_prefix(text, "0b"), 2),
        InputRadix::Auto => {
            if has_prefix(text, "0x") {
                (&text[2..], 16)
            } else if has_prefix(text, "0b") {
                (&text[2..], 2)
            } else {
                (text, 10)
            }
        }
    };
    i64::from_str_radix(digits, base).with_context(|| format!("invalid operand '{raw}'"))
}

fn has_prefix(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn strip_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    if has_prefix(text, prefix) {
        &text[prefix.len()..]
    } else {
        text
    }
}

/// Formats one value at the given width.
pub fn format_value(value: u32, width: Width, format: ValueFormat) -> String {
    let value = value & width.mask();
    let dec = width.mask().to_string().len();
    let hex = width.hex_digits();
    let bin = width.bits() as usize;
    match format {
        ValueFormat::Decimal => format!("{value:>dec$}"),
        ValueFormat::Hex => format!("0x{value:0hex$X}"),
        ValueFormat::Binary => format!("0b{value:0bin$b}"),
        ValueFormat::All => format!("{value:>dec$} (0x{value:0hex$X}, 0b{value:0bin$b})"),
    }
}

fn format_flag(flag: bool) -> &'static str {
    if flag { "1 (SET)" } else { "0 (CLEAR)" }
}

/// Full report for one executed operation.
pub fn format_execution(
    op: Operation,
    a: u32,
    b: u32,
    out: &AluOutput,
    width: Width,
    format: ValueFormat,
) -> String {
    let rule = "=".repeat(BANNER);
    let mut s = String::new();
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, "ALU Operation: {op}");
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(
        s,
        "Opcode:      {} (binary: 0b{}, decimal: {})",
        op.opcode_str(),
        op.opcode_str(),
        op.opcode()
    );
    let _ = writeln!(s, "Category:    {}", op.category());
    let _ = writeln!(s, "Expression:  {}", op.expression());
    let _ = writeln!(s, "Description: {}", op.description());
    let _ = writeln!(s, "Width:       {width}");
    let _ = writeln!(s);
    let _ = writeln!(s, "Inputs:");
    let _ = writeln!(s, "  A = {}", format_value(a, width, format));
    let _ = writeln!(s, "  B = {}", format_value(b, width, format));
    let _ = writeln!(s);
    let _ = writeln!(s, "Result:");
    let _ = writeln!(s, "  OUT = {}", format_value(out.result, width, format));
    let _ = writeln!(s);
    let _ = writeln!(s, "Flags:");
    let _ = writeln!(s, "  Carry (C):    {}", format_flag(out.flags.carry));
    let _ = writeln!(s, "  Zero (Z):     {}", format_flag(out.flags.zero));
    let _ = writeln!(s, "  Negative (N): {}", format_flag(out.flags.negative));
    let _ = writeln!(s, "  Overflow (V): {}", format_flag(out.flags.overflow));
    let _ = write!(s, "{rule}");
    s
}

/// Operation table grouped by category.
pub fn format_operation_list() -> String {
    let rule = "=".repeat(BANNER);
    let thin = "-".repeat(BANNER);
    let mut s = String::new();
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, "Available ALU Operations ({} total)", Operation::ALL.len());
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s);
    for category in Category::ALL {
        let _ = writeln!(s, "{category} Operations:");
        let _ = writeln!(s, "{thin}");
        for op in Operation::ALL.into_iter().filter(|op| op.category() == category) {
            let _ = writeln!(
                s,
                "  {:<8} [{}]  {:<20}  {}",
                op.name(),
                op.opcode_str(),
                op.expression(),
                op.description()
            );
        }
        let _ = writeln!(s);
    }
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, "Usage Examples:");
    let _ = writeln!(s, "  alu exec ADD 42 23");
    let _ = writeln!(s, "  alu exec --hex XOR 0xAA 0x55");
    let _ = writeln!(s, "  alu exec --binary AND 11110000 00001111");
    let _ = writeln!(s, "  alu exec --format all SUB 100 35");
    let _ = write!(s, "{rule}");
    s
}
