//! CLI argument definitions for the bitcalc explainer.

use std::path::PathBuf;

use bitcalc_model::{BitWidth, BitwiseOp, Operation, Radix};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bitcalc",
    version,
    about = "Bitwise and arithmetic explainer - step-by-step fixed-width integer math",
    long_about = "Explain integer arithmetic the way a fixed-width register performs it.\n\n\
                  Supports binary, octal, decimal and hexadecimal operands on 8, 16 and\n\
                  32-bit two's-complement registers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Explain an operation step by step.
    Explain(ExplainArgs),

    /// Show a value in every radix and as fixed-width bit patterns.
    Convert(ConvertArgs),

    /// Run a plain bitwise operation (including NOT and shifts).
    Calc(CalcArgs),

    /// List all operations the explainer supports.
    Operations,
}

#[derive(Parser)]
pub struct ExplainArgs {
    /// Operation: add, subtract, multiply, divide, and, or, xor (or + - * / & | ^).
    #[arg(value_name = "OPERATION")]
    pub operation: Operation,

    /// First operand.
    #[arg(value_name = "A", allow_hyphen_values = true)]
    pub operand_a: String,

    /// Second operand.
    #[arg(value_name = "B", allow_hyphen_values = true)]
    pub operand_b: String,

    /// Radix the operands are written in (2, 8, 10, 16 or bin, oct, dec, hex).
    #[arg(long = "radix", short = 'r', default_value = "10")]
    pub radix: Radix,

    /// Register width in bits (8, 16 or 32).
    #[arg(long = "width", short = 'w', default_value = "8")]
    pub width: BitWidth,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Reject empty or malformed operands instead of treating them as zero.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Omit per-bit carry narration from subtraction traces.
    #[arg(long = "no-subtraction-bits")]
    pub no_subtraction_bits: bool,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Value to convert.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Radix the value is written in.
    #[arg(long = "radix", short = 'r', default_value = "10")]
    pub radix: Radix,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct CalcArgs {
    /// Operation: and, or, xor, not, shl, shr.
    #[arg(value_name = "OPERATION")]
    pub op: BitwiseOp,

    /// First operand.
    #[arg(value_name = "A", allow_hyphen_values = true)]
    pub operand_a: String,

    /// Second operand (shift amount for shl/shr; ignored by not).
    #[arg(value_name = "B", allow_hyphen_values = true, default_value = "0")]
    pub operand_b: String,

    /// Radix the operands are written in.
    #[arg(long = "radix", short = 'r', default_value = "10")]
    pub radix: Radix,

    /// Register width in bits (8, 16 or 32).
    #[arg(long = "width", short = 'w', default_value = "8")]
    pub width: BitWidth,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Reject empty or malformed operands instead of treating them as zero.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
