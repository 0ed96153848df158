use bitcalc_model::{BitWidth, CalculationTrace, Operation, StepExplanation, StepKind};

use super::{operands_step, overflow_note};
use crate::encoder::to_binary;

const RESTORING_DIVISION: &str = "Restoring division works through the dividend one bit at a \
     time, from the most-significant bit down. 1) Shift the partial remainder left by one bit \
     and bring down the next dividend bit. 2) Subtract the divisor from the partial remainder. \
     3) If the result is negative, restore the previous remainder by adding the divisor back \
     and write 0 into the quotient; otherwise keep the result and write 1. 4) Repeat until \
     every dividend bit has been brought down; what is left is the remainder.";

/// Explains `a / b`. The quotient rounds toward negative infinity and the
/// remainder is the truncating `a % b`, so it takes the sign of the dividend.
/// When the operands have different signs and do not divide evenly,
/// `q * b + r` is then one divisor away from `a`.
pub(super) fn explain(a: i64, b: i64, width: BitWidth) -> CalculationTrace {
    let setup = operands_step(a, b, width);

    if b == 0 {
        let zero_bits = to_binary(0, width);
        return CalculationTrace {
            operation: Operation::Divide,
            width,
            operand_a: a,
            operand_b: b,
            result: 0,
            remainder: None,
            binary_result: zero_bits,
            overflow: false,
            steps: vec![
                setup,
                StepExplanation::new(
                    StepKind::DivisionByZero,
                    "Division by zero",
                    "Division by zero! The divisor is 0, so no quotient exists.",
                )
                .with_result("undefined (reported as 0)"),
            ],
            bit_level: None,
        };
    }

    let (quotient, remainder) = quotient_and_remainder(i128::from(a), i128::from(b));
    let check = if quotient * i128::from(b) + remainder == i128::from(a) {
        format!("Check: {quotient} × {b} + {remainder} = {a}.")
    } else {
        format!(
            "The quotient is rounded down while {a} % {b} = {remainder} keeps the sign of \
             the dividend, so {quotient} × {b} + {remainder} differs from {a} by {b}."
        )
    };
    let quotient_bits = to_binary(quotient, width);
    let remainder_bits = to_binary(remainder, width);

    let steps = vec![
        setup,
        StepExplanation::new(StepKind::Method, "Restoring division", RESTORING_DIVISION),
        StepExplanation::new(
            StepKind::Result,
            "Quotient and remainder",
            format!(
                "{a} ÷ {b} = {quotient} remainder {remainder}. {check} {}",
                overflow_note(quotient, width)
            ),
        )
        .with_binary(format!(
            "quotient  = {quotient_bits}  ({quotient})\nremainder = {remainder_bits}  ({remainder})"
        ))
        .with_result(format!(
            "quotient {quotient} (binary {quotient_bits}), remainder {remainder} (binary {remainder_bits})"
        )),
    ];

    CalculationTrace {
        operation: Operation::Divide,
        width,
        operand_a: a,
        operand_b: b,
        result: quotient,
        remainder: Some(remainder),
        binary_result: quotient_bits,
        overflow: !width.fits(quotient),
        steps,
        bit_level: None,
    }
}

/// Floored quotient and truncating remainder. `b` must be non-zero.
fn quotient_and_remainder(a: i128, b: i128) -> (i128, i128) {
    let quotient = a / b;
    let remainder = a % b;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        (quotient - 1, remainder)
    } else {
        (quotient, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotient_and_remainder() {
        assert_eq!(quotient_and_remainder(17, 5), (3, 2));
        assert_eq!(quotient_and_remainder(-7, 2), (-4, -1));
        assert_eq!(quotient_and_remainder(7, -2), (-4, 1));
        assert_eq!(quotient_and_remainder(-7, -2), (3, -1));
        assert_eq!(quotient_and_remainder(-8, 2), (-4, 0));
    }

    #[test]
    fn test_divide_negative_operands() {
        let trace = explain(-7, 2, BitWidth::W8);
        assert_eq!(trace.result, -4);
        assert_eq!(trace.remainder, Some(-1));
        let summary = &trace.final_step().unwrap().description;
        assert!(summary.starts_with("-7 ÷ 2 = -4 remainder -1."));
        assert!(summary.contains("differs from -7 by 2"));

        let trace = explain(7, -2, BitWidth::W8);
        assert_eq!(trace.result, -4);
        assert_eq!(trace.remainder, Some(1));

        let trace = explain(-8, 2, BitWidth::W8);
        assert_eq!(trace.remainder, Some(0));
        assert!(trace.final_step().unwrap().description.contains("Check: -4 × 2 + 0 = -8."));
    }

    #[test]
    fn test_divide_quotient_and_remainder() {
        let trace = explain(17, 5, BitWidth::W8);
        assert_eq!(trace.result, 3);
        assert_eq!(trace.remainder, Some(2));
        assert_eq!(
            trace.final_step().unwrap().binary.as_deref(),
            Some("quotient  = 00000011  (3)\nremainder = 00000010  (2)")
        );
    }

    #[test]
    fn test_divide_by_zero_is_terminal() {
        let trace = explain(10, 0, BitWidth::W8);
        assert_eq!(trace.result, 0);
        assert_eq!(trace.steps.len(), 2);
        assert!(trace.is_division_by_zero());
        assert!(trace.final_step().unwrap().description.starts_with("Division by zero!"));
    }

    #[test]
    fn test_divide_extreme_operands_do_not_overflow() {
        let trace = explain(i64::MIN, -1, BitWidth::W32);
        assert_eq!(trace.result, -i128::from(i64::MIN));
        assert_eq!(trace.remainder, Some(0));
        assert!(trace.overflow);
    }
}
