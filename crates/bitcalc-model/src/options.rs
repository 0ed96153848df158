//! Configuration options for explanation.

use serde::{Deserialize, Serialize};

/// How operand text that cannot be parsed is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Empty or malformed text counts as zero.
    #[default]
    Lenient,
    /// Empty or malformed text is reported as an error.
    Strict,
}

/// Options controlling explainer behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainOptions {
    /// Operand parse handling.
    pub parse_policy: ParsePolicy,

    /// Attach per-bit carry narration to subtraction traces.
    ///
    /// Subtraction runs as `a + (-b)`, so the narration is the addition
    /// narration over `a` and the two's complement of `b`.
    pub subtraction_bit_level: bool,
}

impl Default for ExplainOptions {
    fn default() -> Self {
        Self {
            parse_policy: ParsePolicy::Lenient,
            subtraction_bit_level: true,
        }
    }
}

impl ExplainOptions {
    /// Options that reject unparseable operands instead of using zero.
    pub fn strict() -> Self {
        Self {
            parse_policy: ParsePolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.parse_policy = policy;
        self
    }

    pub fn with_subtraction_bit_level(mut self, enable: bool) -> Self {
        self.subtraction_bit_level = enable;
        self
    }
}
