//! Expression evaluation

pub mod binary;

use crate::error::Result;
use crate::stack::OperandStack;
use crate::token::Token;
use crate::EvalContext;

/// Trait for evaluating token sequences to an integer.
///
/// Implemented for anything that can be viewed as a slice of token strings.
pub trait Evaluate {
    /// Evaluate this token sequence with the given context.
    fn eval(&self, ctx: &EvalContext) -> Result<i64>;
}

impl<S: AsRef<str>> Evaluate for [S] {
    fn eval(&self, ctx: &EvalContext) -> Result<i64> {
        evaluate_with(self, ctx)
    }
}

impl<S: AsRef<str>> Evaluate for Vec<S> {
    fn eval(&self, ctx: &EvalContext) -> Result<i64> {
        evaluate_with(self, ctx)
    }
}

impl<S: AsRef<str>, const N: usize> Evaluate for [S; N] {
    fn eval(&self, ctx: &EvalContext) -> Result<i64> {
        evaluate_with(self, ctx)
    }
}

/// Evaluate an RPN token sequence with the default context.
///
/// # Example
///
/// ```
/// use rpn::{evaluate, EvalError};
///
/// assert_eq!(evaluate(&["2", "1", "+", "3", "*"]), Ok(9));
/// assert_eq!(evaluate(&["-7", "3", "/"]), Ok(-2));
/// assert_eq!(
///     evaluate(&["10", "0", "/"]),
///     Err(EvalError::DivisionByZero { position: 2 })
/// );
/// ```
pub fn evaluate<S: AsRef<str>>(tokens: &[S]) -> Result<i64> {
    evaluate_with(tokens, &EvalContext::default())
}

/// Evaluate an RPN token sequence.
///
/// Single left-to-right pass: numbers are pushed, operators pop two
/// operands and push the result. The stack must end with exactly one value.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn evaluate_with<S: AsRef<str>>(tokens: &[S], ctx: &EvalContext) -> Result<i64> {
    let mut stack = OperandStack::with_limit(ctx.max_stack_depth);

    let outcome = tokens
        .iter()
        .enumerate()
        .try_for_each(|(position, raw)| step(&mut stack, raw.as_ref(), position, ctx))
        .and_then(|()| stack.into_result());

    match &outcome {
        Ok(value) => tracing::debug!(result = value, "evaluation finished"),
        Err(err) => tracing::debug!(error = %err, "evaluation failed"),
    }
    outcome
}

/// Consume one token.
fn step(
    stack: &mut OperandStack,
    raw: &str,
    position: usize,
    ctx: &EvalContext,
) -> Result<()> {
    if ctx.trace {
        tracing::trace!(position, token = raw, depth = stack.len(), "token");
    }

    match Token::classify(raw, position)? {
        Token::Number(value) => stack.push(value, position),
        Token::Operator(op) => {
            let (operand1, operand2) = stack.pop_operands(op, position)?;
            let result = op.apply(operand1, operand2, position)?;
            stack.push(result, position)
        }
    }
}
