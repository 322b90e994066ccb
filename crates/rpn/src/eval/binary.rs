//! Binary operation evaluation

use crate::error::{EvalError, Result};
use crate::token::Operator;

impl Operator {
    /// Apply this operator to `operand1 op operand2`.
    ///
    /// `position` is the operator's token index, used for error reporting.
    pub fn apply(self, operand1: i64, operand2: i64, position: usize) -> Result<i64> {
        match self {
            Operator::Add => eval_add(operand1, operand2, position),
            Operator::Sub => eval_sub(operand1, operand2, position),
            Operator::Mul => eval_mul(operand1, operand2, position),
            Operator::Div => eval_div(operand1, operand2, position),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operators
// ═══════════════════════════════════════════════════════════════════════

fn eval_add(left: i64, right: i64, position: usize) -> Result<i64> {
    left.checked_add(right).ok_or_else(|| overflow(Operator::Add, position))
}

fn eval_sub(left: i64, right: i64, position: usize) -> Result<i64> {
    left.checked_sub(right).ok_or_else(|| overflow(Operator::Sub, position))
}

fn eval_mul(left: i64, right: i64, position: usize) -> Result<i64> {
    left.checked_mul(right).ok_or_else(|| overflow(Operator::Mul, position))
}

/// Integer division truncated toward zero.
///
/// `i64` division already rounds toward zero; `checked_div` also turns
/// `i64::MIN / -1` into an error instead of a panic.
fn eval_div(left: i64, right: i64, position: usize) -> Result<i64> {
    if right == 0 {
        return Err(EvalError::DivisionByZero { position });
    }

    left.checked_div(right).ok_or_else(|| overflow(Operator::Div, position))
}

fn overflow(op: Operator, position: usize) -> EvalError {
    EvalError::IntegerOverflow {
        op: op.symbol(),
        position,
    }
}
