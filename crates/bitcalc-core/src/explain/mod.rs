//! Step-by-step operation explainers.
//!
//! Each operation has its own module producing a [`CalculationTrace`] with a
//! fixed step sequence. [`explain_values`] dispatches on the closed
//! [`Operation`] enum; [`explain`] and [`explain_with_options`] add operand
//! parsing in front of it.

mod add;
mod bitwise;
mod divide;
mod multiply;
mod subtract;

use bitcalc_model::{
    BitWidth, CalculationTrace, ExplainOptions, ExplainRequest, Operation, Radix,
    StepExplanation, StepKind,
};
use tracing::{debug, debug_span, trace};

use crate::converter::{parse_or_zero, resolve_operand};
use crate::encoder::to_binary;
use crate::error::{ExplainError, Result};

/// Explains `operation` on two operand texts read in `radix`.
///
/// Operands that do not parse count as zero, so this never fails.
pub fn explain(
    operation: Operation,
    operand_a: &str,
    operand_b: &str,
    radix: Radix,
    width: BitWidth,
) -> CalculationTrace {
    let a = parse_or_zero(operand_a, radix);
    let b = parse_or_zero(operand_b, radix);
    explain_values(operation, a, b, width, &ExplainOptions::default())
}

/// Explains a request, parsing operands according to `options`.
///
/// # Errors
///
/// Returns [`ExplainError::Parse`] when the parse policy is strict and an
/// operand is empty or malformed.
pub fn explain_with_options(
    request: &ExplainRequest,
    options: &ExplainOptions,
) -> Result<CalculationTrace> {
    let a = resolve_operand(&request.operand_a, request.radix, options.parse_policy)
        .map_err(|source| ExplainError::parse("A", source))?;
    let b = resolve_operand(&request.operand_b, request.radix, options.parse_policy)
        .map_err(|source| ExplainError::parse("B", source))?;
    Ok(explain_values(request.operation, a, b, request.width, options))
}

/// Explains `operation` on already parsed operands.
pub fn explain_values(
    operation: Operation,
    a: i64,
    b: i64,
    width: BitWidth,
    options: &ExplainOptions,
) -> CalculationTrace {
    let span = debug_span!("explain", operation = %operation, width = width.bits());
    let _guard = span.enter();

    let outcome = match operation {
        Operation::Add => add::explain(a, b, width),
        Operation::Subtract => subtract::explain(a, b, width, options.subtraction_bit_level),
        Operation::Multiply => multiply::explain(a, b, width),
        Operation::Divide => divide::explain(a, b, width),
        Operation::And => bitwise::explain(&bitwise::AND, a, b, width),
        Operation::Or => bitwise::explain(&bitwise::OR, a, b, width),
        Operation::Xor => bitwise::explain(&bitwise::XOR, a, b, width),
    };

    for step in &outcome.steps {
        trace!(title = %step.title, "step");
    }
    debug!(
        a,
        b,
        result = %outcome.result,
        overflow = outcome.overflow,
        steps = outcome.steps.len(),
        "explained"
    );
    outcome
}

/// First step shared by every explainer: both operands as bit patterns.
fn operands_step(a: i64, b: i64, width: BitWidth) -> StepExplanation {
    StepExplanation::new(
        StepKind::Operands,
        "Convert operands to binary",
        format!("Write A = {a} and B = {b} as {width} two's-complement patterns."),
    )
    .with_binary(format!(
        "A = {}  ({a})\nB = {}  ({b})",
        to_binary(a, width),
        to_binary(b, width)
    ))
}

/// Says whether `value` fits in `width` and what a register would keep.
fn overflow_note(value: i128, width: BitWidth) -> String {
    let min = width.min_signed();
    let max = width.max_unsigned();
    if width.fits(value) {
        format!("{value} fits in {width} (range {min} to {max}); no overflow.")
    } else {
        format!(
            "{value} is outside the {width} range ({min} to {max}): overflow. \
             The register keeps only the low {} bits, {}.",
            width.bits(),
            to_binary(value, width)
        )
    }
}

/// `-b` written for narration, parenthesized when `b` is itself negative.
fn negated(value: i64) -> String {
    if value < 0 {
        format!("-({value})")
    } else {
        format!("-{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_note() {
        assert!(overflow_note(16, BitWidth::W8).contains("no overflow"));
        let note = overflow_note(300, BitWidth::W8);
        assert!(note.contains("overflow"));
        assert!(note.contains("00101100"));
    }

    #[test]
    fn test_negated_label() {
        assert_eq!(negated(6), "-6");
        assert_eq!(negated(-6), "-(-6)");
    }

    #[test]
    fn test_operands_step_panel() {
        let step = operands_step(10, 6, BitWidth::W8);
        assert_eq!(step.kind, StepKind::Operands);
        assert_eq!(
            step.binary.as_deref(),
            Some("A = 00001010  (10)\nB = 00000110  (6)")
        );
    }
}
