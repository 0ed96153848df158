//! Data model for the bitcalc explainer.
//!
//! Inputs ([`Radix`], [`BitWidth`], [`Operation`]), configuration
//! ([`ExplainOptions`]) and outputs ([`CalculationTrace`], [`Conversions`])
//! shared by the engine and any presentation layer.

pub mod conversion;
pub mod enums;
pub mod error;
pub mod options;
pub mod trace;

pub use conversion::{Calculation, Conversions};
pub use enums::{BitWidth, BitwiseOp, Operation, Radix};
pub use error::{ParseError, Result};
pub use options::{ExplainOptions, ParsePolicy};
pub use trace::{
    BitRule, BitStep, CalculationTrace, ExplainRequest, StepExplanation, StepKind,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_is_lenient() {
        let options = ExplainOptions::default();
        assert_eq!(options.parse_policy, ParsePolicy::Lenient);
        assert!(options.subtraction_bit_level);
        assert_eq!(ExplainOptions::strict().parse_policy, ParsePolicy::Strict);
    }

    #[test]
    fn request_serializes() {
        let request = ExplainRequest::new(Operation::Xor, "1100", "1010")
            .with_radix(Radix::Binary)
            .with_width(BitWidth::W16);
        let json = serde_json::to_string(&request).expect("serialize request");
        assert!(json.contains("\"width\":16"));
        assert!(json.contains("\"radix\":\"binary\""));
        let round: ExplainRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round, request);
    }
}
