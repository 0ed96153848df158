//! Plain bitwise calculator.
//!
//! Unlike the explainers, results here are register values: every operation
//! acts on the `width`-bit patterns of its operands and the result is
//! wrapped to `width` bits.

use bitcalc_model::{BitWidth, BitwiseOp, Calculation};
use tracing::debug;

use crate::converter::convert;
use crate::encoder::{pattern, render_bits};

/// Applies `op` to the `width`-bit patterns of `a` and `b`.
///
/// `b` is ignored by [`BitwiseOp::Not`]. Shift amounts are taken modulo the
/// width, and [`BitwiseOp::Shr`] is a logical (zero-filling) shift.
pub fn calculate(op: BitwiseOp, a: i64, b: i64, width: BitWidth) -> Calculation {
    let mask = width.mask();
    let a_bits = pattern(a, width);
    let b_bits = pattern(b, width);
    let shift = b.rem_euclid(i64::from(width.bits())) as u32;

    let unsigned = match op {
        BitwiseOp::And => a_bits & b_bits,
        BitwiseOp::Or => a_bits | b_bits,
        BitwiseOp::Xor => a_bits ^ b_bits,
        BitwiseOp::Not => !a_bits & mask,
        BitwiseOp::Shl => (a_bits << shift) & mask,
        BitwiseOp::Shr => a_bits >> shift,
    };
    let signed = to_signed(unsigned, width);
    debug!(op = %op, a, b, unsigned, signed, "calculated");

    Calculation {
        op,
        width,
        operand_a: a,
        operand_b: (!op.is_unary()).then_some(b),
        unsigned,
        signed,
        binary: render_bits(unsigned, width.bits()),
        conversions: convert(unsigned as i64),
    }
}

/// Reads a `width`-bit pattern as a signed integer.
pub fn to_signed(pattern: u64, width: BitWidth) -> i64 {
    let spare = 64 - width.bits();
    ((pattern << spare) as i64) >> spare
}
