use serde::{Deserialize, Serialize};

use crate::enums::{BitWidth, BitwiseOp, Radix};

/// One integer rendered in every supported radix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversions {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hex: String,
}

impl Conversions {
    /// Returns the rendering for `radix`.
    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Binary => &self.binary,
            Radix::Octal => &self.octal,
            Radix::Decimal => &self.decimal,
            Radix::Hex => &self.hex,
        }
    }
}

/// Outcome of the plain bitwise calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub op: BitwiseOp,
    pub width: BitWidth,
    pub operand_a: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand_b: Option<i64>,
    /// Result bit pattern read as an unsigned `width`-bit integer.
    pub unsigned: u64,
    /// Result bit pattern read as a signed `width`-bit integer.
    pub signed: i64,
    /// Zero-padded `width`-bit pattern.
    pub binary: String,
    /// Renderings of the unsigned value.
    pub conversions: Conversions,
}
