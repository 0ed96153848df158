//! Tests for base conversion.

use bitcalc_core::converter::{convert, convert_text, parse, parse_or_zero, render};
use bitcalc_model::{ParseError, Radix};
use proptest::prelude::*;

fn any_radix() -> impl Strategy<Value = Radix> {
    prop::sample::select(Radix::ALL.to_vec())
}

proptest! {
    #[test]
    fn render_then_parse_round_trips(value in any::<i64>(), radix in any_radix()) {
        prop_assert_eq!(parse(&render(value, radix), radix), Ok(value));
    }

    #[test]
    fn renderings_derive_from_the_same_value(value in any::<i64>()) {
        let conversions = convert(value);
        for radix in Radix::ALL {
            prop_assert_eq!(parse(conversions.get(radix), radix), Ok(value));
        }
    }

    #[test]
    fn hex_is_uppercase(value in any::<i64>()) {
        let hex = render(value, Radix::Hex);
        prop_assert_eq!(hex.to_uppercase(), hex);
    }
}

#[test]
fn empty_input_clears_display() {
    assert_eq!(convert_text("", Radix::Binary), Ok(None));
    assert_eq!(convert_text("  \t", Radix::Hex), Ok(None));
}

#[test]
fn malformed_input_is_an_error_for_display_and_zero_for_computation() {
    let error = convert_text("0x1G", Radix::Hex).unwrap_err();
    assert_eq!(error, ParseError::invalid("0x1G", Radix::Hex));
    assert_eq!(parse_or_zero("0x1G", Radix::Hex), 0);
    assert_eq!(parse_or_zero("", Radix::Hex), 0);
}

#[test]
fn digits_outside_radix_are_rejected() {
    assert!(parse("8", Radix::Octal).is_err());
    assert!(parse("2", Radix::Binary).is_err());
    assert!(parse("A", Radix::Decimal).is_err());
    assert_eq!(parse("7", Radix::Octal), Ok(7));
}

#[test]
fn converts_known_values() {
    let conversions = convert(2024);
    assert_eq!(conversions.binary, "11111101000");
    assert_eq!(conversions.octal, "3750");
    assert_eq!(conversions.decimal, "2024");
    assert_eq!(conversions.hex, "7E8");
}
