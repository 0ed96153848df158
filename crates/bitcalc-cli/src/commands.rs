use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use bitcalc_cli::render::{
    ConversionReport, render_calculation, render_conversions, render_operations, render_trace,
};
use bitcalc_core::converter::resolve_operand;
use bitcalc_core::{calculate, explain_with_options, parse};
use bitcalc_model::{ExplainOptions, ExplainRequest, ParsePolicy};

use crate::cli::{CalcArgs, ConvertArgs, ExplainArgs, OutputFormatArg};

pub fn run_explain(args: &ExplainArgs) -> Result<()> {
    let span = info_span!("explain", operation = %args.operation, width = %args.width);
    let _guard = span.enter();

    let request = ExplainRequest::new(args.operation, &args.operand_a, &args.operand_b)
        .with_radix(args.radix)
        .with_width(args.width);
    let options = ExplainOptions::default()
        .with_parse_policy(parse_policy(args.strict))
        .with_subtraction_bit_level(!args.no_subtraction_bits);
    debug!(?options, radix = %args.radix, "explaining");

    let trace = explain_with_options(&request, &options).context("explain calculation")?;
    info!(
        result = %trace.result,
        overflow = trace.overflow,
        steps = trace.steps.len(),
        "explained"
    );
    match args.format {
        OutputFormatArg::Text => println!("{}", render_trace(&trace)),
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&trace).context("serialize trace")?
        ),
    }
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let span = info_span!("convert", radix = %args.radix);
    let _guard = span.enter();

    let value = parse(&args.value, args.radix)
        .with_context(|| format!("parse value '{}'", args.value))?;
    let report = ConversionReport::new(value);
    info!(value, "converted");
    match args.format {
        OutputFormatArg::Text => println!("{}", render_conversions(&report)),
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize conversions")?
        ),
    }
    Ok(())
}

pub fn run_calc(args: &CalcArgs) -> Result<()> {
    let span = info_span!("calc", op = %args.op, width = %args.width);
    let _guard = span.enter();

    let policy = parse_policy(args.strict);
    let a = resolve_operand(&args.operand_a, args.radix, policy).context("operand A")?;
    let b = resolve_operand(&args.operand_b, args.radix, policy).context("operand B")?;
    let calculation = calculate(args.op, a, b, args.width);
    info!(signed = calculation.signed, unsigned = calculation.unsigned, "calculated");
    match args.format {
        OutputFormatArg::Text => println!("{}", render_calculation(&calculation)),
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&calculation).context("serialize calculation")?
        ),
    }
    Ok(())
}

pub fn run_operations() -> Result<()> {
    println!("{}", render_operations());
    Ok(())
}

fn parse_policy(strict: bool) -> ParsePolicy {
    if strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Lenient
    }
}
