//! Calculation traces produced by the explainers.
//!
//! A [`CalculationTrace`] is a display-only projection of one calculation:
//! the operands, the untruncated result, an ordered list of
//! [`StepExplanation`]s and, for additive and bitwise operations, a per-bit
//! narration made of [`BitStep`]s. Traces are built once and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{BitWidth, Operation, Radix};

/// Category of a step, for consumers that style or filter steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Operands shown in binary.
    Operands,
    /// Rule or truth table for the operator.
    Rules,
    /// Description of the algorithm being applied.
    Method,
    /// Two's complement derivation of a negated operand.
    Complement,
    /// One shifted partial product of a multiplication.
    PartialProduct { bit: u32 },
    /// Final result.
    Result,
    /// Terminal notice for a zero divisor.
    DivisionByZero,
}

/// One step of a calculation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepExplanation {
    pub kind: StepKind,
    pub title: String,
    pub description: String,
    /// Binary working panel (may span several lines).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
    /// Terminal result annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl StepExplanation {
    pub fn new(kind: StepKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            binary: None,
            result: None,
        }
    }

    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = Some(binary.into());
        self
    }

    #[must_use]
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }
}

/// How the output bit of a [`BitStep`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitRule {
    /// Full-adder sum with carry.
    Sum,
    And,
    Or,
    Xor,
}

impl BitRule {
    /// Operator text used in narration.
    pub fn symbol(&self) -> &'static str {
        match self {
            BitRule::Sum => "+",
            BitRule::And => "AND",
            BitRule::Or => "OR",
            BitRule::Xor => "XOR",
        }
    }
}

/// Narration of a single bit position.
///
/// `position` counts from the least-significant bit (0), independent of the
/// order in which the steps are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitStep {
    pub position: u32,
    pub rule: BitRule,
    pub a: u8,
    pub b: u8,
    pub result: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carry_in: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carry_out: Option<u8>,
}

impl BitStep {
    /// Returns true if this position produced a carry into the next one.
    pub fn generated_carry(&self) -> bool {
        self.carry_out == Some(1)
    }
}

impl fmt::Display for BitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rule, self.carry_in, self.carry_out) {
            (BitRule::Sum, Some(carry_in), Some(carry_out)) => write!(
                f,
                "Bit {}: {} + {} + carry {} = {}, carry {}",
                self.position, self.a, self.b, carry_in, self.result, carry_out
            ),
            (rule, _, _) => write!(
                f,
                "Bit {}: {} {} {} = {}",
                self.position,
                self.a,
                rule.symbol(),
                self.b,
                self.result
            ),
        }
    }
}

/// The complete explanation of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationTrace {
    pub operation: Operation,
    pub width: BitWidth,
    pub operand_a: i64,
    pub operand_b: i64,
    /// Untruncated result (the quotient for division).
    pub result: i128,
    /// Remainder, for division only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remainder: Option<i128>,
    /// Bit pattern of the result as shown in the final step.
    pub binary_result: String,
    /// True when the result does not fit in `width` bits.
    pub overflow: bool,
    pub steps: Vec<StepExplanation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_level: Option<Vec<BitStep>>,
}

impl CalculationTrace {
    /// Returns the first step of the given kind.
    pub fn step(&self, kind: StepKind) -> Option<&StepExplanation> {
        self.steps.iter().find(|step| step.kind == kind)
    }

    /// Returns the last step, which always carries the outcome.
    pub fn final_step(&self) -> Option<&StepExplanation> {
        self.steps.last()
    }

    /// Returns true if the divisor was zero.
    pub fn is_division_by_zero(&self) -> bool {
        self.step(StepKind::DivisionByZero).is_some()
    }

    /// Renders the bit-level narration as text lines.
    pub fn bit_level_lines(&self) -> Vec<String> {
        self.bit_level
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

/// Operand text and selectors as collected by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub operation: Operation,
    pub operand_a: String,
    pub operand_b: String,
    #[serde(default)]
    pub radix: Radix,
    #[serde(default)]
    pub width: BitWidth,
}

impl ExplainRequest {
    pub fn new(
        operation: Operation,
        operand_a: impl Into<String>,
        operand_b: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            operand_a: operand_a.into(),
            operand_b: operand_b.into(),
            radix: Radix::default(),
            width: BitWidth::default(),
        }
    }

    #[must_use]
    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: BitWidth) -> Self {
        self.width = width;
        self
    }
}
