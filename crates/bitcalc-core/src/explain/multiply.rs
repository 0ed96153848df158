use std::fmt::Write as _;

use bitcalc_model::{BitWidth, CalculationTrace, Operation, StepExplanation, StepKind};

use super::{operands_step, overflow_note};
use crate::encoder::{bit, pattern, render_bits, to_binary};

/// Explains `a * b` with the shift-and-add method.
///
/// Partial products are taken from the `width`-bit pattern of `b` and shown
/// in twice the width, since a product can need up to `2 * width` bits.
pub(super) fn explain(a: i64, b: i64, width: BitWidth) -> CalculationTrace {
    let result = i128::from(a) * i128::from(b);
    let double = width.bits() * 2;
    let b_bits = to_binary(b, width);

    let mut steps = vec![
        operands_step(a, b, width),
        StepExplanation::new(
            StepKind::Method,
            "Shift and add",
            format!(
                "For every 1 bit in the multiplier {b_bits}, shift the multiplicand {a} left \
                 by that bit's position and add the shifted copies together. Partial \
                 products are written in {double} bits because a product can need twice \
                 the operand width."
            ),
        ),
    ];

    let mut partials = Vec::new();
    for position in (0..width.bits()).filter(|&position| bit(b, position) == 1) {
        let partial = i128::from(a) << position;
        steps.push(
            StepExplanation::new(
                StepKind::PartialProduct { bit: position },
                format!("Partial product for bit {position}"),
                format!("Bit {position} of the multiplier is 1, so add {a} << {position} = {partial}."),
            )
            .with_binary(render_bits(partial, double)),
        );
        partials.push(partial);
    }

    let partial_sum: i128 = partials.iter().sum();
    let mut summary = if partials.is_empty() {
        "The multiplier has no 1 bits, so there is nothing to add.".to_string()
    } else {
        let terms: Vec<String> = partials.iter().map(ToString::to_string).collect();
        format!("{} = {partial_sum}.", terms.join(" + "))
    };
    if partial_sum != result {
        let _ = write!(
            summary,
            " The multiplier's {width} pattern stands for {}, so the sum matches {result} \
             only in the low {} bits.",
            pattern(b, width),
            width.bits()
        );
    }
    summary.push(' ');
    summary.push_str(&overflow_note(result, width));

    let result_bits = render_bits(result, double);
    steps.push(
        StepExplanation::new(StepKind::Result, "Sum of partial products", summary)
            .with_binary(result_bits.clone())
            .with_result(format!("{a} × {b} = {result} (binary {result_bits})")),
    );

    CalculationTrace {
        operation: Operation::Multiply,
        width,
        operand_a: a,
        operand_b: b,
        result,
        remainder: None,
        binary_result: result_bits,
        overflow: !width.fits(result),
        steps,
        bit_level: None,
    }
}
