//! Error types for RPN evaluation

use thiserror::Error;

/// Failure raised while evaluating an RPN token sequence.
///
/// Every variant aborts evaluation; no partial result is ever returned
/// alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A non-operator token is not a base-10 signed integer.
    #[error("Malformed number {token:?} at token {position}")]
    MalformedNumber {
        /// The offending token text
        token: String,
        /// Zero-based token index
        position: usize,
    },

    /// An operator was reached with fewer than two values on the stack.
    #[error("Operator '{op}' at token {position} needs 2 operands, found {available}")]
    InsufficientOperands {
        /// Operator symbol
        op: char,
        /// Values on the stack when the operator was reached
        available: usize,
        /// Zero-based token index
        position: usize,
    },

    /// Divisor of `/` was zero.
    #[error("Division by zero at token {position}")]
    DivisionByZero {
        /// Zero-based token index
        position: usize,
    },

    /// The stack did not end with exactly one value.
    #[error("Expected exactly one value after evaluation, found {remaining}")]
    TooManyOperands {
        /// Values left on the stack (0 for empty input)
        remaining: usize,
    },

    /// Result does not fit in an `i64`.
    #[error("Integer overflow in '{op}' at token {position}")]
    IntegerOverflow {
        /// Operator symbol
        op: char,
        /// Zero-based token index
        position: usize,
    },

    /// A push would grow the stack past the configured limit.
    #[error("Operand stack limit of {limit} exceeded at token {position}")]
    StackLimitExceeded {
        /// Configured maximum depth
        limit: usize,
        /// Zero-based token index
        position: usize,
    },
}

impl EvalError {
    /// Index of the token that caused this error, if any.
    ///
    /// `TooManyOperands` is raised after the last token and has none.
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::MalformedNumber { position, .. }
            | EvalError::InsufficientOperands { position, .. }
            | EvalError::DivisionByZero { position }
            | EvalError::IntegerOverflow { position, .. }
            | EvalError::StackLimitExceeded { position, .. } => Some(*position),
            EvalError::TooManyOperands { .. } => None,
        }
    }
}

/// Result type alias for RPN evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
