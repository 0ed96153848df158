//! Text rendering of traces, conversions and calculator results.
//!
//! Every function returns the rendered text so callers decide where it goes.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use bitcalc_core::narrator::carry_row;
use bitcalc_core::{convert, to_twos_complement};
use bitcalc_model::{
    BitRule, BitWidth, Calculation, CalculationTrace, Conversions, Operation, Radix, StepKind,
};

/// A value in every radix plus its pattern at each supported width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub value: i64,
    pub conversions: Conversions,
    pub patterns: Vec<WidthPattern>,
}

/// Two's-complement pattern of a value at one width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidthPattern {
    pub width: BitWidth,
    pub bits: String,
    /// False when the pattern is truncated.
    pub fits: bool,
}

impl ConversionReport {
    pub fn new(value: i64) -> Self {
        let patterns = BitWidth::ALL
            .iter()
            .copied()
            .map(|width| WidthPattern {
                width,
                bits: to_twos_complement(value, width),
                fits: width.fits(i128::from(value)),
            })
            .collect();
        Self {
            value,
            conversions: convert(value),
            patterns,
        }
    }
}

/// One-line outcome, e.g. `17 ÷ 5 = 3 remainder 2`.
pub fn summary_line(trace: &CalculationTrace) -> String {
    let symbol = trace.operation.symbol();
    let (a, b) = (trace.operand_a, trace.operand_b);
    if trace.is_division_by_zero() {
        return format!("{a} {symbol} {b} = undefined (division by zero)");
    }
    let mut line = match trace.remainder {
        Some(remainder) => format!("{a} {symbol} {b} = {} remainder {remainder}", trace.result),
        None => format!("{a} {symbol} {b} = {}", trace.result),
    };
    if trace.overflow {
        let _ = write!(
            line,
            " [overflow: the {} register holds {}]",
            trace.width, trace.binary_result
        );
    }
    line
}

/// Full text rendering of a trace: heading, step table, outcome and any
/// bit-by-bit narration.
pub fn render_trace(trace: &CalculationTrace) -> String {
    let mut lines = vec![format!(
        "{} {} {}  ({}, {})",
        trace.operand_a,
        trace.operation.symbol(),
        trace.operand_b,
        trace.operation,
        trace.width
    )];

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Explanation"),
        header_cell("Working"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, step) in trace.steps.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            step_cell(step.kind, &step.title),
            Cell::new(&step.description),
            optional_cell(step.binary.as_deref()),
            optional_cell(step.result.as_deref()),
        ]);
    }
    lines.push(table.to_string());
    lines.push(summary_line(trace));

    if let Some(bits) = trace.bit_level.as_deref() {
        lines.push(String::new());
        lines.push("Bit by bit:".to_string());
        lines.extend(trace.bit_level_lines().into_iter().map(|line| format!("  {line}")));
        if bits.first().is_some_and(|step| step.rule == BitRule::Sum) {
            lines.push(format!("Carries: {}", carry_row(bits)));
        }
    }
    lines.join("\n")
}

/// Renders a conversion report as a radix table and a width table.
pub fn render_conversions(report: &ConversionReport) -> String {
    let mut radix_table = Table::new();
    radix_table.set_header(vec![header_cell("Radix"), header_cell("Value")]);
    apply_table_style(&mut radix_table);
    for radix in Radix::ALL {
        radix_table.add_row(vec![
            Cell::new(radix.as_str()),
            Cell::new(report.conversions.get(radix)),
        ]);
    }

    let mut width_table = Table::new();
    width_table.set_header(vec![
        header_cell("Width"),
        header_cell("Two's complement"),
        header_cell("Fits"),
    ]);
    apply_table_style(&mut width_table);
    align_column(&mut width_table, 2, CellAlignment::Center);
    for pattern in &report.patterns {
        let fits = if pattern.fits {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("truncated").fg(Color::Yellow)
        };
        width_table.add_row(vec![
            Cell::new(pattern.width),
            Cell::new(&pattern.bits),
            fits,
        ]);
    }
    format!("{radix_table}\n{width_table}")
}

/// Renders a plain calculator result.
pub fn render_calculation(calculation: &Calculation) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let operands = match calculation.operand_b {
        Some(b) => format!("{} {} {}", calculation.operand_a, calculation.op, b),
        None => format!("{} {}", calculation.op, calculation.operand_a),
    };
    table.add_row(vec![Cell::new("Operation"), Cell::new(operands)]);
    table.add_row(vec![Cell::new("Width"), Cell::new(calculation.width)]);
    table.add_row(vec![
        Cell::new("Binary"),
        Cell::new(&calculation.binary).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Unsigned"), Cell::new(calculation.unsigned)]);
    table.add_row(vec![Cell::new("Signed"), Cell::new(calculation.signed)]);
    table.add_row(vec![
        Cell::new("Octal"),
        Cell::new(&calculation.conversions.octal),
    ]);
    table.add_row(vec![Cell::new("Hex"), Cell::new(&calculation.conversions.hex)]);
    table.to_string()
}

/// Lists the operations the explainer supports.
pub fn render_operations() -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Operation"),
        header_cell("Symbol"),
        header_cell("Kind"),
        header_cell("Method"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for operation in Operation::ALL {
        let kind = if operation.is_bitwise() {
            "bitwise"
        } else {
            "arithmetic"
        };
        table.add_row(vec![
            Cell::new(operation.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(operation.symbol()),
            Cell::new(kind),
            Cell::new(method(operation)),
        ]);
    }
    table.to_string()
}

fn method(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "ripple-carry addition",
        Operation::Subtract => "add the two's complement",
        Operation::Multiply => "shift and add partial products",
        Operation::Divide => "restoring long division",
        Operation::And | Operation::Or | Operation::Xor => "per-bit truth table",
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn step_cell(kind: StepKind, title: &str) -> Cell {
    match kind {
        StepKind::Result => Cell::new(title)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        StepKind::DivisionByZero => Cell::new(title)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        StepKind::Complement | StepKind::PartialProduct { .. } => {
            Cell::new(title).fg(Color::Yellow)
        }
        StepKind::Operands | StepKind::Rules | StepKind::Method => Cell::new(title),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
