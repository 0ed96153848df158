use bitcalc_model::{BitWidth, CalculationTrace, Operation, StepExplanation, StepKind};

use super::{negated, overflow_note};
use crate::encoder::{complement_steps, to_binary};
use crate::narrator::narrate_sum;

/// Explains `a - b` as `a + (-b)`: the adder never subtracts, it adds the
/// two's complement of the subtrahend.
pub(super) fn explain(a: i64, b: i64, width: BitWidth, with_bit_level: bool) -> CalculationTrace {
    let result = i128::from(a) - i128::from(b);
    let a_bits = to_binary(a, width);
    let complement = complement_steps(b, width);
    let result_bits = to_binary(result, width);
    let minus_b = negated(b);

    let steps = vec![
        StepExplanation::new(
            StepKind::Operands,
            "Write the minuend in binary",
            format!(
                "Subtraction is carried out as {a} + ({minus_b}): instead of subtracting, \
                 the adder adds the two's complement of {b}."
            ),
        )
        .with_binary(format!("A = {a_bits}  ({a})")),
        StepExplanation::new(
            StepKind::Complement,
            format!("Two's complement of {b}"),
            format!("Invert every bit of {b}, then add 1 to get the pattern of {minus_b}."),
        )
        .with_binary(format!(
            "{}  ({b})\n{}  (inverted)\n{}  (+1 = {minus_b})",
            complement.original, complement.inverted, complement.negated
        )),
        StepExplanation::new(
            StepKind::Result,
            "Add the patterns",
            format!(
                "{a} + ({minus_b}) = {result}. Any carry out of the top bit is dropped. {}",
                overflow_note(result, width)
            ),
        )
        .with_binary(format!(
            "  {a_bits}\n+ {}\n= {result_bits}",
            complement.negated
        ))
        .with_result(format!("{a} - {b} = {result} (binary {result_bits})")),
    ];

    let bit_level = with_bit_level.then(|| narrate_sum(a, -i128::from(b), width));

    CalculationTrace {
        operation: Operation::Subtract,
        width,
        operand_a: a,
        operand_b: b,
        result,
        remainder: None,
        binary_result: result_bits,
        overflow: !width.fits(result),
        steps,
        bit_level,
    }
}
