//! Fixed-width binary encoding.
//!
//! Every rendering here is a zero-padded two's-complement bit pattern.
//! [`to_binary`] masks the machine representation directly, while
//! [`to_twos_complement`] derives negative patterns the way they are taught
//! (write the magnitude, invert every bit, add one). The two must agree.

use bitcalc_model::BitWidth;

/// Invert-and-increment derivation of `-value` from `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplementSteps {
    /// Pattern of the starting value.
    pub original: String,
    /// Every bit of `original` flipped.
    pub inverted: String,
    /// `inverted + 1`, the pattern of the negated value.
    pub negated: String,
}

/// Returns the low `width` bits of `value` as an unsigned pattern.
pub fn pattern(value: impl Into<i128>, width: BitWidth) -> u64 {
    let value: i128 = value.into();
    (value as u64) & width.mask()
}

/// Renders the low `bits` bits of `value`, zero-padded to exactly `bits`
/// characters. `bits` is capped at 128.
pub fn render_bits(value: impl Into<i128>, bits: u32) -> String {
    let bits = bits.min(128);
    let mask = if bits == 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    };
    let value: i128 = value.into();
    let masked = (value as u128) & mask;
    format!("{masked:0width$b}", width = bits as usize)
}

/// Renders `value` as a `width`-character two's-complement bit string.
pub fn to_binary(value: impl Into<i128>, width: BitWidth) -> String {
    render_bits(value, width.bits())
}

/// Renders `value` in two's complement by explicit complementation.
///
/// Non-negative values are rendered directly. Negative values take the
/// magnitude's pattern, invert it and add one, discarding any carry out of
/// the top bit.
pub fn to_twos_complement(value: impl Into<i128>, width: BitWidth) -> String {
    let value: i128 = value.into();
    if value >= 0 {
        return to_binary(value, width);
    }
    let magnitude = render_unsigned(value.unsigned_abs(), width.bits());
    increment(&invert(&magnitude))
}

/// Shows how the pattern of `-value` is obtained from the pattern of `value`.
pub fn complement_steps(value: impl Into<i128>, width: BitWidth) -> ComplementSteps {
    let original = to_binary(value, width);
    let inverted = invert(&original);
    let negated = increment(&inverted);
    ComplementSteps {
        original,
        inverted,
        negated,
    }
}

/// Reads bit `position` (0 = least significant) of `value`.
pub fn bit(value: impl Into<i128>, position: u32) -> u8 {
    let value: i128 = value.into();
    ((value >> position.min(127)) & 1) as u8
}

fn render_unsigned(value: u128, bits: u32) -> String {
    let mask = (1u128 << bits) - 1;
    format!("{:0width$b}", value & mask, width = bits as usize)
}

fn invert(bits: &str) -> String {
    bits.chars()
        .map(|c| if c == '1' { '0' } else { '1' })
        .collect()
}

/// Adds one to a bit string, dropping the carry out of the top bit.
fn increment(bits: &str) -> String {
    let mut digits: Vec<char> = bits.chars().collect();
    for digit in digits.iter_mut().rev() {
        if *digit == '1' {
            *digit = '0';
        } else {
            *digit = '1';
            break;
        }
    }
    digits.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_binary_pads_to_width() {
        assert_eq!(to_binary(10, BitWidth::W8), "00001010");
        assert_eq!(to_binary(10, BitWidth::W16), "0000000000001010");
        assert_eq!(to_binary(0, BitWidth::W8), "00000000");
    }

    #[test]
    fn test_to_binary_negative() {
        assert_eq!(to_binary(-1, BitWidth::W8), "11111111");
        assert_eq!(to_binary(-6, BitWidth::W8), "11111010");
        assert_eq!(to_binary(-128, BitWidth::W8), "10000000");
    }

    #[test]
    fn test_to_binary_truncates_wide_values() {
        assert_eq!(to_binary(256 + 5, BitWidth::W8), "00000101");
    }

    #[test]
    fn test_twos_complement_explicit() {
        assert_eq!(to_twos_complement(-6, BitWidth::W8), "11111010");
        assert_eq!(to_twos_complement(6, BitWidth::W8), "00000110");
        assert_eq!(to_twos_complement(-256, BitWidth::W8), "00000000");
    }

    #[test]
    fn test_complement_steps() {
        let steps = complement_steps(6, BitWidth::W8);
        assert_eq!(steps.original, "00000110");
        assert_eq!(steps.inverted, "11111001");
        assert_eq!(steps.negated, "11111010");
    }

    #[test]
    fn test_render_bits_double_width() {
        assert_eq!(render_bits(10, 16), "0000000000001010");
        assert_eq!(render_bits(-1, 4), "1111");
    }

    #[test]
    fn test_pattern_and_bit() {
        assert_eq!(pattern(-1, BitWidth::W16), 0xFFFF);
        assert_eq!(bit(0b1010, 1), 1);
        assert_eq!(bit(0b1010, 2), 0);
        assert_eq!(bit(-1, 40), 1);
    }
}
