//! Tests for the text and JSON renderings used by the CLI.

use bitcalc_cli::render::{
    ConversionReport, render_calculation, render_conversions, render_operations, render_trace,
    summary_line,
};
use bitcalc_core::{calculate, explain};
use bitcalc_model::{BitWidth, BitwiseOp, Operation, Radix};

#[test]
fn summary_lines() {
    let add = explain(Operation::Add, "10", "6", Radix::Decimal, BitWidth::W8);
    insta::assert_snapshot!(summary_line(&add), @"10 + 6 = 16");

    let divide = explain(Operation::Divide, "17", "5", Radix::Decimal, BitWidth::W8);
    insta::assert_snapshot!(summary_line(&divide), @"17 ÷ 5 = 3 remainder 2");

    let negative = explain(Operation::Divide, "-7", "2", Radix::Decimal, BitWidth::W8);
    insta::assert_snapshot!(summary_line(&negative), @"-7 ÷ 2 = -4 remainder -1");

    let by_zero = explain(Operation::Divide, "10", "0", Radix::Decimal, BitWidth::W8);
    insta::assert_snapshot!(summary_line(&by_zero), @"10 ÷ 0 = undefined (division by zero)");

    let overflow = explain(Operation::Add, "F0", "10", Radix::Hex, BitWidth::W8);
    insta::assert_snapshot!(
        summary_line(&overflow),
        @"240 + 16 = 256 [overflow: the 8-bit register holds 00000000]"
    );
}

#[test]
fn trace_text_includes_steps_and_bits() {
    let trace = explain(Operation::Add, "10", "6", Radix::Decimal, BitWidth::W8);
    let text = render_trace(&trace);
    assert!(text.starts_with("10 + 6  (add, 8-bit)"));
    assert!(text.contains("00010000"));
    assert!(text.contains("Bit by bit:"));
    assert!(text.contains("  Bit 0: 0 + 0 + carry 0 = 0, carry 0"));
    assert!(text.contains("Carries: 00011100"));
}

#[test]
fn bitwise_trace_has_no_carry_row() {
    let trace = explain(Operation::Xor, "12", "10", Radix::Decimal, BitWidth::W8);
    let text = render_trace(&trace);
    assert!(text.contains("  Bit 7: 0 XOR 0 = 0"));
    assert!(!text.contains("Carries:"));
}

#[test]
fn multiply_trace_has_no_bit_section() {
    let trace = explain(Operation::Multiply, "5", "3", Radix::Decimal, BitWidth::W8);
    let text = render_trace(&trace);
    assert!(!text.contains("Bit by bit:"));
    assert!(text.ends_with("5 × 3 = 15"));
}

#[test]
fn conversion_report_patterns() {
    let report = ConversionReport::new(-1);
    assert_eq!(report.conversions.decimal, "-1");
    let bits: Vec<&str> = report.patterns.iter().map(|p| p.bits.as_str()).collect();
    assert_eq!(
        bits,
        vec!["11111111", "1111111111111111", "11111111111111111111111111111111"]
    );
    assert!(report.patterns.iter().all(|p| p.fits));

    let report = ConversionReport::new(300);
    assert!(!report.patterns[0].fits);
    assert!(report.patterns[1].fits);
    let text = render_conversions(&report);
    assert!(text.contains("100101100"));
    assert!(text.contains("12C"));
    assert!(text.contains("truncated"));
}

#[test]
fn conversion_report_json() {
    let report = ConversionReport::new(255);
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["value"], 255);
    assert_eq!(json["conversions"]["hex"], "FF");
    assert_eq!(json["patterns"][0]["width"], 8);
    assert_eq!(json["patterns"][0]["bits"], "11111111");
}

#[test]
fn calculation_table() {
    let calculation = calculate(BitwiseOp::Not, 0, 0, BitWidth::W8);
    let text = render_calculation(&calculation);
    assert!(text.contains("not 0"));
    assert!(text.contains("11111111"));
    assert!(text.contains("FF"));
    assert!(text.contains("-1"));
}

#[test]
fn operations_table_lists_everything() {
    let text = render_operations();
    for operation in Operation::ALL {
        assert!(text.contains(operation.as_str()), "missing {operation}");
    }
    assert!(text.contains("two's complement"));
}
