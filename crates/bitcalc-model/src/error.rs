//! Error types for operand parsing.

use thiserror::Error;

use crate::enums::Radix;

/// Errors that can occur when reading operand text under a radix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty or whitespace only.
    #[error("no value entered")]
    Empty,

    /// Input contains characters that are not digits of the radix.
    #[error("'{text}' is not a valid {radix} number")]
    Invalid { text: String, radix: Radix },

    /// Input is well formed but does not fit in a 64-bit signed integer.
    #[error("'{text}' is out of range for a 64-bit integer")]
    OutOfRange { text: String, radix: Radix },
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    /// Create an Invalid error.
    pub fn invalid(text: impl Into<String>, radix: Radix) -> Self {
        Self::Invalid {
            text: text.into(),
            radix,
        }
    }

    /// Create an OutOfRange error.
    pub fn out_of_range(text: impl Into<String>, radix: Radix) -> Self {
        Self::OutOfRange {
            text: text.into(),
            radix,
        }
    }

    /// Returns true if the input was simply missing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
