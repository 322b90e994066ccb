//! Token classification

use std::fmt;

use crate::error::{EvalError, Result};

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero
    Div,
}

impl Operator {
    /// Look up an operator by its exact token text.
    ///
    /// Only the bare symbols match; `"-5"` is a number, not a minus.
    pub fn from_symbol(raw: &str) -> Option<Self> {
        match raw {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// The operator's symbol.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Integer literal
    Number(i64),
    /// Operator symbol
    Operator(Operator),
}

impl Token {
    /// Classify a raw token.
    ///
    /// Anything that is not an operator symbol must parse as a base-10
    /// `i64` (an optional leading `+` or `-` is accepted).
    pub fn classify(raw: &str, position: usize) -> Result<Self> {
        if let Some(op) = Operator::from_symbol(raw) {
            return Ok(Token::Operator(op));
        }

        raw.parse::<i64>()
            .map(Token::Number)
            .map_err(|_| EvalError::MalformedNumber {
                token: raw.to_string(),
                position,
            })
    }
}
