//! Tests for fixed-width encoding.

use bitcalc_core::encoder::{complement_steps, to_binary, to_twos_complement};
use bitcalc_model::BitWidth;
use proptest::prelude::*;

fn any_width() -> impl Strategy<Value = BitWidth> {
    prop::sample::select(BitWidth::ALL.to_vec())
}

proptest! {
    #[test]
    fn complement_matches_masked_pattern(value in i64::MIN..0, width in any_width()) {
        prop_assert_eq!(to_binary(value, width), to_twos_complement(value, width));
    }

    #[test]
    fn non_negative_values_are_unchanged(value in 0..=i64::MAX, width in any_width()) {
        prop_assert_eq!(to_binary(value, width), to_twos_complement(value, width));
    }

    #[test]
    fn binary_has_exactly_width_digits(value in any::<i64>(), width in any_width()) {
        let bits = to_binary(value, width);
        prop_assert_eq!(bits.len(), width.bits() as usize);
        prop_assert!(bits.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn complement_steps_end_at_negated_pattern(value in any::<i32>(), width in any_width()) {
        let steps = complement_steps(value, width);
        prop_assert_eq!(steps.negated, to_binary(-i64::from(value), width));
    }
}

#[test]
fn complement_of_six() {
    assert_eq!(to_twos_complement(-6, BitWidth::W8), "11111010");
    assert_eq!(to_twos_complement(-6, BitWidth::W16), "1111111111111010");
    assert_eq!(
        to_twos_complement(-6, BitWidth::W32),
        "11111111111111111111111111111010"
    );
}

#[test]
fn most_negative_values_per_width() {
    assert_eq!(to_twos_complement(-128, BitWidth::W8), "10000000");
    assert_eq!(to_twos_complement(-32768, BitWidth::W16), "1000000000000000");
    assert_eq!(
        to_twos_complement(i64::from(i32::MIN), BitWidth::W32),
        "10000000000000000000000000000000"
    );
}
