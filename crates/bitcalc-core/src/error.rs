//! Error types for the explainer engine.

use bitcalc_model::ParseError;
use thiserror::Error;

/// Errors surfaced when explaining from operand text under a strict policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    /// An operand could not be parsed.
    #[error("operand {operand}: {source}")]
    Parse {
        operand: &'static str,
        source: ParseError,
    },
}

/// Result type alias for explainer operations.
pub type Result<T> = std::result::Result<T, ExplainError>;

impl ExplainError {
    /// Create a Parse error for the named operand.
    pub fn parse(operand: &'static str, source: ParseError) -> Self {
        Self::Parse { operand, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcalc_model::Radix;

    #[test]
    fn test_error_display() {
        let err = ExplainError::parse("B", ParseError::invalid("2", Radix::Binary));
        assert_eq!(format!("{err}"), "operand B: '2' is not a valid binary number");
        assert!(std::error::Error::source(&err).is_some());
    }
}
