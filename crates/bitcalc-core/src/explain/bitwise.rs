use bitcalc_model::{BitRule, BitWidth, CalculationTrace, Operation, StepExplanation, StepKind};

use super::{operands_step, overflow_note};
use crate::encoder::to_binary;
use crate::narrator::narrate_bitwise;

/// Static description of one logical operator.
pub(super) struct LogicRule {
    operation: Operation,
    rule: BitRule,
    apply: fn(i64, i64) -> i64,
    statement: &'static str,
    truth_table: &'static str,
}

pub(super) const AND: LogicRule = LogicRule {
    operation: Operation::And,
    rule: BitRule::And,
    apply: |a, b| a & b,
    statement: "A result bit is 1 only when both input bits are 1 (1 AND 1 = 1); \
                every other combination gives 0.",
    truth_table: "0 AND 0 = 0\n0 AND 1 = 0\n1 AND 0 = 0\n1 AND 1 = 1",
};

pub(super) const OR: LogicRule = LogicRule {
    operation: Operation::Or,
    rule: BitRule::Or,
    apply: |a, b| a | b,
    statement: "A result bit is 0 only when both input bits are 0 (0 OR 0 = 0); \
                every other combination gives 1.",
    truth_table: "0 OR 0 = 0\n0 OR 1 = 1\n1 OR 0 = 1\n1 OR 1 = 1",
};

pub(super) const XOR: LogicRule = LogicRule {
    operation: Operation::Xor,
    rule: BitRule::Xor,
    apply: |a, b| a ^ b,
    statement: "A result bit is 1 when the input bits differ and 0 when they are the same.",
    truth_table: "0 XOR 0 = 0\n0 XOR 1 = 1\n1 XOR 0 = 1\n1 XOR 1 = 0",
};

pub(super) fn explain(logic: &LogicRule, a: i64, b: i64, width: BitWidth) -> CalculationTrace {
    let result = i128::from((logic.apply)(a, b));
    let symbol = logic.operation.symbol();
    let result_bits = to_binary(result, width);

    let steps = vec![
        operands_step(a, b, width),
        StepExplanation::new(
            StepKind::Rules,
            format!("Apply the {symbol} rule to each bit"),
            logic.statement,
        )
        .with_binary(logic.truth_table),
        StepExplanation::new(StepKind::Result, "Result", overflow_note(result, width))
            .with_binary(format!(
                "{:>pad$} {}\n{symbol} {}\n{:>pad$} {result_bits}",
                "",
                to_binary(a, width),
                to_binary(b, width),
                "=",
                pad = symbol.len()
            ))
            .with_result(format!("{a} {symbol} {b} = {result} (binary {result_bits})")),
    ];

    CalculationTrace {
        operation: logic.operation,
        width,
        operand_a: a,
        operand_b: b,
        result,
        remainder: None,
        binary_result: result_bits,
        overflow: !width.fits(result),
        steps,
        bit_level: Some(narrate_bitwise(logic.rule, a, b, width)),
    }
}
