//! Bit-level narration.
//!
//! Additive narration walks the patterns from bit 0 upwards, the way carries
//! ripple. Bitwise narration follows the rendered string from left to right,
//! so it lists the most-significant bit first; the position reported in each
//! [`BitStep`] is still counted from the right.

use bitcalc_model::{BitRule, BitStep, BitWidth};

use crate::encoder::{bit, to_binary};

/// Narrates a ripple-carry addition of the `width`-bit patterns of `a` and
/// `b`, least-significant bit first.
pub fn narrate_sum(a: impl Into<i128>, b: impl Into<i128>, width: BitWidth) -> Vec<BitStep> {
    let a: i128 = a.into();
    let b: i128 = b.into();
    let mut carry = 0u8;
    (0..width.bits())
        .map(|position| {
            let a_bit = bit(a, position);
            let b_bit = bit(b, position);
            let total = a_bit + b_bit + carry;
            let step = BitStep {
                position,
                rule: BitRule::Sum,
                a: a_bit,
                b: b_bit,
                result: total % 2,
                carry_in: Some(carry),
                carry_out: Some(total / 2),
            };
            carry = total / 2;
            step
        })
        .collect()
}

/// Narrates a bitwise operation over the `width`-bit patterns of `a` and
/// `b`, most-significant bit first.
///
/// [`BitRule::Sum`] gives the half-adder sum bit with no carries; use
/// [`narrate_sum`] for a full addition.
pub fn narrate_bitwise(
    rule: BitRule,
    a: impl Into<i128>,
    b: impl Into<i128>,
    width: BitWidth,
) -> Vec<BitStep> {
    let a_bits = to_binary(a, width);
    let b_bits = to_binary(b, width);
    let top = width.bits() - 1;
    a_bits
        .bytes()
        .zip(b_bits.bytes())
        .zip(0u32..)
        .map(|((a_char, b_char), index)| {
            let a_bit = a_char - b'0';
            let b_bit = b_char - b'0';
            BitStep {
                position: top - index,
                rule,
                a: a_bit,
                b: b_bit,
                result: apply(rule, a_bit, b_bit),
                carry_in: None,
                carry_out: None,
            }
        })
        .collect()
}

/// Renders the carry into each position, most-significant first, aligned
/// with the operand patterns.
pub fn carry_row(steps: &[BitStep]) -> String {
    steps
        .iter()
        .rev()
        .map(|step| match step.carry_in {
            Some(1) => '1',
            _ => '0',
        })
        .collect()
}

/// Returns true if the most-significant position carried out of the register.
pub fn carries_out(steps: &[BitStep]) -> bool {
    steps
        .iter()
        .max_by_key(|step| step.position)
        .is_some_and(BitStep::generated_carry)
}

fn apply(rule: BitRule, a: u8, b: u8) -> u8 {
    match rule {
        BitRule::And => a & b,
        BitRule::Or => a | b,
        BitRule::Xor | BitRule::Sum => a ^ b,
    }
}
