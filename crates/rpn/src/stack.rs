//! Operand stack

use crate::error::{EvalError, Result};
use crate::token::Operator;

/// LIFO accumulator of intermediate results.
///
/// Created empty for each evaluation and consumed by [`into_result`](Self::into_result).
#[derive(Debug, Clone, Default)]
pub struct OperandStack {
    values: Vec<i64>,
    limit: Option<usize>,
}

impl OperandStack {
    /// Create an unbounded stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack that refuses to grow past `limit` values.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            values: Vec::new(),
            limit,
        }
    }

    /// Push a value produced by the token at `position`.
    pub fn push(&mut self, value: i64, position: usize) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.values.len() >= limit {
                return Err(EvalError::StackLimitExceeded { limit, position });
            }
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop the two operands of `op`, returned as `(operand1, operand2)`.
    ///
    /// `operand2` is the top of the stack; `operand1` was pushed before it.
    /// On failure the stack is left untouched.
    pub fn pop_operands(&mut self, op: Operator, position: usize) -> Result<(i64, i64)> {
        let available = self.values.len();
        if available < 2 {
            return Err(EvalError::InsufficientOperands {
                op: op.symbol(),
                available,
                position,
            });
        }
        let operand2 = self.values[available - 1];
        let operand1 = self.values[available - 2];
        self.values.truncate(available - 2);
        Ok((operand1, operand2))
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the stack, yielding its single value.
    pub fn into_result(self) -> Result<i64> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            rest => Err(EvalError::TooManyOperands {
                remaining: rest.len(),
            }),
        }
    }
}
