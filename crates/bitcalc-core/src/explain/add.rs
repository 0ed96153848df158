use bitcalc_model::{BitWidth, CalculationTrace, Operation, StepExplanation, StepKind};

use super::operands_step;
use crate::encoder::to_binary;
use crate::narrator::{carries_out, carry_row, narrate_sum};

const CARRY_RULES: &str = "Add the two bits in each column plus the carry from the column to \
     its right, starting at bit 0: 0 + 0 = 0, 0 + 1 = 1, 1 + 1 = 10 (write 0, carry 1), \
     1 + 1 + 1 = 11 (write 1, carry 1).";

pub(super) fn explain(a: i64, b: i64, width: BitWidth) -> CalculationTrace {
    let result = i128::from(a) + i128::from(b);
    let a_bits = to_binary(a, width);
    let b_bits = to_binary(b, width);
    let result_bits = to_binary(result, width);
    let bit_level = narrate_sum(a, b, width);
    let overflow = result > width.max_unsigned();

    let mut column_note = String::from(CARRY_RULES);
    if carries_out(&bit_level) {
        column_note.push_str(" The last column produces a carry out of the register, which is dropped.");
    }

    let steps = vec![
        operands_step(a, b, width),
        StepExplanation::new(
            StepKind::Method,
            "Add bit by bit from right to left",
            column_note,
        )
        .with_binary(format!(
            "carry {}\n      {a_bits}\n    + {b_bits}\n    = {result_bits}",
            carry_row(&bit_level)
        )),
        StepExplanation::new(StepKind::Result, "Result", unsigned_overflow_note(result, width))
            .with_binary(result_bits.clone())
            .with_result(format!("{a} + {b} = {result} (binary {result_bits})")),
    ];

    CalculationTrace {
        operation: Operation::Add,
        width,
        operand_a: a,
        operand_b: b,
        result,
        remainder: None,
        binary_result: result_bits,
        overflow,
        steps,
        bit_level: Some(bit_level),
    }
}

/// Addition overflows only when the sum exceeds the largest unsigned
/// `width`-bit value.
fn unsigned_overflow_note(value: i128, width: BitWidth) -> String {
    let max = width.max_unsigned();
    if value > max {
        format!(
            "{value} is greater than {max}, the largest unsigned {width} value: overflow. \
             The register keeps only the low {} bits, {}.",
            width.bits(),
            to_binary(value, width)
        )
    } else {
        format!("{value} does not exceed {max}, the largest unsigned {width} value; no overflow.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_panel_shows_carries() {
        let trace = explain(10, 6, BitWidth::W8);
        let method = trace.step(StepKind::Method).unwrap();
        assert_eq!(
            method.binary.as_deref(),
            Some("carry 00011100\n      00001010\n    + 00000110\n    = 00010000")
        );
        assert!(!method.description.contains("dropped"));
    }

    #[test]
    fn test_add_negative_wraps_without_overflow() {
        let trace = explain(-1, 1, BitWidth::W8);
        assert_eq!(trace.result, 0);
        assert!(!trace.overflow);
        assert!(trace.steps[1].description.contains("dropped"));
    }

    #[test]
    fn test_add_negative_sum_is_not_unsigned_overflow() {
        let trace = explain(-100, -100, BitWidth::W8);
        assert_eq!(trace.result, -200);
        assert!(!trace.overflow);
        assert_eq!(trace.binary_result, "00111000");
        let note = &trace.final_step().unwrap().description;
        assert!(note.contains("does not exceed 255"));
    }

    #[test]
    fn test_add_overflow_flagged() {
        let trace = explain(200, 100, BitWidth::W8);
        assert_eq!(trace.result, 300);
        assert!(trace.overflow);
        assert_eq!(trace.binary_result, "00101100");
    }
}
