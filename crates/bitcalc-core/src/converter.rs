//! Base conversion between binary, octal, decimal and hexadecimal.
//!
//! The decimal integer is the single source of truth: every rendering in
//! [`Conversions`] is produced from it, never from another rendering.
//! Negative values are written sign-magnitude (`-101`), so parsing a
//! rendering always gives back the value it came from.

use bitcalc_model::{Conversions, ParseError, ParsePolicy, Radix, Result};
use tracing::debug;

/// Parses operand text under `radix`.
///
/// Surrounding whitespace is ignored. An optional `+`/`-` sign, the radix's
/// prefix (`0b`, `0o`, `0x`, any case) and `_` digit separators are
/// accepted.
pub fn parse(text: &str, radix: Radix) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = strip_prefix(unsigned, radix).replace('_', "");
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(ParseError::invalid(trimmed, radix));
    }

    let magnitude = u64::from_str_radix(&digits, radix.base())
        .map_err(|_| ParseError::out_of_range(trimmed, radix))?;
    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    i64::try_from(value).map_err(|_| ParseError::out_of_range(trimmed, radix))
}

/// Parses operand text, using zero for anything that does not parse.
pub fn parse_or_zero(text: &str, radix: Radix) -> i64 {
    parse(text, radix).unwrap_or_else(|error| {
        debug!(text, radix = %radix, %error, "operand coerced to zero");
        0
    })
}

/// Parses operand text according to `policy`.
pub fn resolve_operand(text: &str, radix: Radix, policy: ParsePolicy) -> Result<i64> {
    match policy {
        ParsePolicy::Lenient => Ok(parse_or_zero(text, radix)),
        ParsePolicy::Strict => parse(text, radix),
    }
}

/// Renders `value` in `radix`. Hexadecimal digits are uppercase.
pub fn render(value: i64, radix: Radix) -> String {
    let magnitude = value.unsigned_abs();
    let digits = match radix {
        Radix::Binary => format!("{magnitude:b}"),
        Radix::Octal => format!("{magnitude:o}"),
        Radix::Decimal => magnitude.to_string(),
        Radix::Hex => format!("{magnitude:X}"),
    };
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Renders `value` in every radix.
pub fn convert(value: i64) -> Conversions {
    Conversions {
        binary: render(value, Radix::Binary),
        octal: render(value, Radix::Octal),
        decimal: render(value, Radix::Decimal),
        hex: render(value, Radix::Hex),
    }
}

/// Converts operand text for display.
///
/// Empty text is the "no value" state and returns `Ok(None)`; malformed
/// text returns the parse error, which display code also shows as cleared.
pub fn convert_text(text: &str, radix: Radix) -> Result<Option<Conversions>> {
    match parse(text, radix) {
        Ok(value) => Ok(Some(convert(value))),
        Err(ParseError::Empty) => Ok(None),
        Err(error) => Err(error),
    }
}

fn strip_prefix(text: &str, radix: Radix) -> &str {
    let Some(prefix) = radix.prefix() else {
        return text;
    };
    match text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &text[prefix.len()..],
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_radix() {
        assert_eq!(parse("1010", Radix::Binary), Ok(10));
        assert_eq!(parse("17", Radix::Octal), Ok(15));
        assert_eq!(parse("-42", Radix::Decimal), Ok(-42));
        assert_eq!(parse("ff", Radix::Hex), Ok(255));
        assert_eq!(parse("FF", Radix::Hex), Ok(255));
    }

    #[test]
    fn test_parse_prefixes_and_separators() {
        assert_eq!(parse("0x1A", Radix::Hex), Ok(26));
        assert_eq!(parse("0B1111_0000", Radix::Binary), Ok(240));
        assert_eq!(parse("-0o10", Radix::Octal), Ok(-8));
        assert_eq!(parse("  +7 ", Radix::Decimal), Ok(7));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse("", Radix::Decimal), Err(ParseError::Empty));
        assert_eq!(parse("   ", Radix::Hex), Err(ParseError::Empty));
        assert!(matches!(
            parse("102", Radix::Binary),
            Err(ParseError::Invalid { .. })
        ));
        assert!(matches!(
            parse("12abc", Radix::Decimal),
            Err(ParseError::Invalid { .. })
        ));
        assert!(matches!(parse("-", Radix::Decimal), Err(ParseError::Invalid { .. })));
        assert!(matches!(parse("--5", Radix::Decimal), Err(ParseError::Invalid { .. })));
        assert!(matches!(parse("0x", Radix::Hex), Err(ParseError::Invalid { .. })));
    }

    #[test]
    fn test_parse_range_limits() {
        assert_eq!(parse("-9223372036854775808", Radix::Decimal), Ok(i64::MIN));
        assert_eq!(parse("9223372036854775807", Radix::Decimal), Ok(i64::MAX));
        assert!(matches!(
            parse("9223372036854775808", Radix::Decimal),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse("FFFFFFFFFFFFFFFFFF", Radix::Hex),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_resolve_operand_policies() {
        assert_eq!(resolve_operand("zz", Radix::Decimal, ParsePolicy::Lenient), Ok(0));
        assert_eq!(resolve_operand("", Radix::Decimal, ParsePolicy::Lenient), Ok(0));
        assert!(resolve_operand("zz", Radix::Decimal, ParsePolicy::Strict).is_err());
        assert_eq!(resolve_operand("z", Radix::Hex, ParsePolicy::Strict).ok(), None);
        assert_eq!(resolve_operand("c", Radix::Hex, ParsePolicy::Strict), Ok(12));
    }

    #[test]
    fn test_convert_all_radices() {
        let conversions = convert(255);
        assert_eq!(conversions.binary, "11111111");
        assert_eq!(conversions.octal, "377");
        assert_eq!(conversions.decimal, "255");
        assert_eq!(conversions.hex, "FF");
    }

    #[test]
    fn test_convert_negative_is_sign_magnitude() {
        let conversions = convert(-5);
        assert_eq!(conversions.binary, "-101");
        assert_eq!(conversions.hex, "-5");
        assert_eq!(convert(i64::MIN).hex, "-8000000000000000");
    }

    #[test]
    fn test_convert_text_states() {
        assert_eq!(convert_text("", Radix::Decimal), Ok(None));
        assert!(convert_text("xyz", Radix::Decimal).is_err());
        let conversions = convert_text("0x10", Radix::Hex).unwrap().unwrap();
        assert_eq!(conversions.decimal, "16");
    }
}
