//! Type-safe enumerations for explainer inputs.
//!
//! These enums replace the loosely typed selector values (radix, bit width,
//! operation tag) that a presentation layer collects from its inputs.
//! Each one parses case-insensitively from the spellings users actually type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number base used to read operand text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    /// Base 2.
    Binary,
    /// Base 8.
    Octal,
    /// Base 10.
    #[default]
    Decimal,
    /// Base 16.
    Hex,
}

impl Radix {
    /// All supported radices in ascending order.
    pub const ALL: [Radix; 4] = [Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hex];

    /// Returns the numeric base.
    pub fn base(&self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hex",
        }
    }

    /// Conventional literal prefix (`0b`, `0o`, `0x`); decimal has none.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Radix::Binary => Some("0b"),
            Radix::Octal => Some("0o"),
            Radix::Decimal => None,
            Radix::Hex => Some("0x"),
        }
    }

    /// Looks up a radix by its numeric base.
    pub fn from_base(base: u32) -> Option<Self> {
        match base {
            2 => Some(Radix::Binary),
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hex),
            _ => None,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Radix {
    type Err = String;

    /// Accepts the base number (`2`, `16`) or a name (`bin`, `hex`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if let Ok(base) = normalized.parse::<u32>() {
            return Radix::from_base(base).ok_or_else(|| format!("Unknown radix: {s}"));
        }

        match normalized.as_str() {
            "bin" | "binary" => Ok(Radix::Binary),
            "oct" | "octal" => Ok(Radix::Octal),
            "dec" | "decimal" => Ok(Radix::Decimal),
            "hex" | "hexadecimal" => Ok(Radix::Hex),
            _ => Err(format!("Unknown radix: {s}")),
        }
    }
}

/// Fixed register width for binary renderings and overflow reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitWidth {
    /// 8-bit (byte).
    #[default]
    W8,
    /// 16-bit (short).
    W16,
    /// 32-bit (int).
    W32,
}

impl BitWidth {
    /// All supported widths in ascending order.
    pub const ALL: [BitWidth; 3] = [BitWidth::W8, BitWidth::W16, BitWidth::W32];

    /// Number of bits.
    pub fn bits(&self) -> u32 {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
        }
    }

    /// Mask selecting the low `bits()` bits.
    pub fn mask(&self) -> u64 {
        (1u64 << self.bits()) - 1
    }

    /// Largest unsigned value, `2^bits - 1`.
    pub fn max_unsigned(&self) -> i128 {
        i128::from(self.mask())
    }

    /// Smallest signed value, `-2^(bits-1)`.
    pub fn min_signed(&self) -> i128 {
        -(1i128 << (self.bits() - 1))
    }

    /// Returns true if `value` is representable in this width under either
    /// the signed or the unsigned interpretation.
    pub fn fits(&self, value: i128) -> bool {
        value >= self.min_signed() && value <= self.max_unsigned()
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = String;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitWidth::W8),
            16 => Ok(BitWidth::W16),
            32 => Ok(BitWidth::W32),
            _ => Err(format!("Unsupported bit width: {bits} (expected 8, 16 or 32)")),
        }
    }
}

impl From<BitWidth> for u32 {
    fn from(width: BitWidth) -> Self {
        width.bits()
    }
}

impl FromStr for BitWidth {
    type Err = String;

    /// Accepts `8`, `16`, `32`, optionally suffixed with `-bit` or `bit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let digits = normalized
            .strip_suffix("-bit")
            .or_else(|| normalized.strip_suffix("bit"))
            .unwrap_or(&normalized)
            .trim();
        let bits: u32 = digits
            .parse()
            .map_err(|_| format!("Unknown bit width: {s}"))?;
        BitWidth::try_from(bits)
    }
}

/// Operation explained step by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    And,
    Or,
    Xor,
}

impl Operation {
    /// All explainable operations in display order.
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::And,
        Operation::Or,
        Operation::Xor,
    ];

    /// Returns the canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::And => "and",
            Operation::Or => "or",
            Operation::Xor => "xor",
        }
    }

    /// Operator symbol used in narration.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
        }
    }

    /// Returns true for the three bit-by-bit logical operations.
    pub fn is_bitwise(&self) -> bool {
        matches!(self, Operation::And | Operation::Or | Operation::Xor)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Accepts tags, common abbreviations and operator symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "add" | "addition" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "subtraction" | "minus" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "multiplication" | "times" | "*" | "×" => {
                Ok(Operation::Multiply)
            }
            "divide" | "div" | "division" | "/" | "÷" => Ok(Operation::Divide),
            "and" | "&" => Ok(Operation::And),
            "or" | "|" => Ok(Operation::Or),
            "xor" | "^" => Ok(Operation::Xor),
            _ => Err(format!("Unknown operation: {s}")),
        }
    }
}

/// Operation of the plain bitwise calculator (no step trace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
}

impl BitwiseOp {
    /// Returns the canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BitwiseOp::And => "and",
            BitwiseOp::Or => "or",
            BitwiseOp::Xor => "xor",
            BitwiseOp::Not => "not",
            BitwiseOp::Shl => "shl",
            BitwiseOp::Shr => "shr",
        }
    }

    /// Returns true if the operation reads only its first operand.
    pub fn is_unary(&self) -> bool {
        matches!(self, BitwiseOp::Not)
    }
}

impl fmt::Display for BitwiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BitwiseOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "and" | "&" => Ok(BitwiseOp::And),
            "or" | "|" => Ok(BitwiseOp::Or),
            "xor" | "^" => Ok(BitwiseOp::Xor),
            "not" | "~" | "!" => Ok(BitwiseOp::Not),
            "shl" | "<<" => Ok(BitwiseOp::Shl),
            "shr" | ">>" => Ok(BitwiseOp::Shr),
            _ => Err(format!("Unknown bitwise operation: {s}")),
        }
    }
}
