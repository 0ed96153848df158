//! Bitwise and arithmetic explainer engine.
//!
//! This crate turns two operands, a bit width and an operation into a
//! [`CalculationTrace`](bitcalc_model::CalculationTrace): the steps a person
//! would take to carry out the calculation by hand on a fixed-width
//! two's-complement register.
//!
//! # Modules
//!
//! - [`converter`]: parsing and rendering in binary, octal, decimal and hex
//! - [`encoder`]: fixed-width two's-complement bit strings
//! - [`explain`]: one explainer per operation
//! - [`narrator`]: per-bit narration for additive and bitwise operations
//! - [`calculator`]: plain bitwise operations without a trace
//!
//! # Example
//!
//! ```
//! use bitcalc_core::explain;
//! use bitcalc_model::{BitWidth, Operation, Radix};
//!
//! let trace = explain(Operation::Add, "10", "6", Radix::Decimal, BitWidth::W8);
//! assert_eq!(trace.result, 16);
//! assert_eq!(trace.binary_result, "00010000");
//! assert!(!trace.overflow);
//! ```

pub mod calculator;
pub mod converter;
pub mod encoder;
mod error;
pub mod explain;
pub mod narrator;

pub use calculator::calculate;
pub use converter::{convert, convert_text, parse, render};
pub use encoder::{to_binary, to_twos_complement};
pub use error::{ExplainError, Result};
pub use explain::{explain, explain_values, explain_with_options};
