//! Presentation components for the bitcalc command-line tool.

pub mod logging;
pub mod render;
