//! # rpn
//!
//! An evaluator for integer arithmetic written in Reverse Polish Notation.
//!
//! Tokens are supplied already split (for example by whitespace). Each token
//! is either a base-10 `i64` literal or one of `+ - * /`. Evaluation is a
//! single left-to-right fold over an operand stack:
//!
//! ```
//! use rpn::evaluate;
//!
//! assert_eq!(evaluate(&["4", "13", "5", "/", "+"]), Ok(6));
//! ```
//!
//! ## Semantics
//!
//! - Division truncates toward zero: `-7 3 /` is `-2`, not `-3`.
//! - Overflow is reported as [`EvalError::IntegerOverflow`], never wrapped.
//! - Evaluation must end with exactly one value on the stack; empty input
//!   is [`EvalError::TooManyOperands`] with nothing remaining.
//!
//! Evaluation holds no shared state, so independent calls may run on any
//! number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod stack;
pub mod token;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, Result};
pub use eval::{evaluate, evaluate_with, Evaluate};
pub use stack::OperandStack;
pub use token::{Operator, Token};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
