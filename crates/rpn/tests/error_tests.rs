// Failure reporting for every error kind
use pretty_assertions::assert_eq;
use rpn::*;

fn eval(tokens: &[&str]) -> std::result::Result<i64, EvalError> {
    evaluate(tokens)
}

// ═══════════════════════════════════════════════════════════════════════
// MalformedNumber
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_malformed_number() {
    assert_eq!(
        eval(&["1", "two", "+"]),
        Err(EvalError::MalformedNumber {
            token: "two".to_string(),
            position: 1,
        })
    );
}

#[test]
fn test_malformed_float_and_unknown_operator() {
    assert!(matches!(
        eval(&["1.5"]),
        Err(EvalError::MalformedNumber { position: 0, .. })
    ));
    assert!(matches!(
        eval(&["7", "2", "%"]),
        Err(EvalError::MalformedNumber { position: 2, .. })
    ));
    assert!(matches!(
        eval(&["2", "3", "^"]),
        Err(EvalError::MalformedNumber { position: 2, .. })
    ));
}

#[test]
fn test_malformed_out_of_range_literal() {
    assert_eq!(
        eval(&["99999999999999999999"]),
        Err(EvalError::MalformedNumber {
            token: "99999999999999999999".to_string(),
            position: 0,
        })
    );
}

#[test]
fn test_malformed_empty_token() {
    assert!(matches!(
        eval(&[""]),
        Err(EvalError::MalformedNumber { position: 0, .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// InsufficientOperands
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_insufficient_operands() {
    assert_eq!(
        eval(&["1", "+"]),
        Err(EvalError::InsufficientOperands {
            op: '+',
            available: 1,
            position: 1,
        })
    );
}

#[test]
fn test_insufficient_operands_leading_operator() {
    assert_eq!(
        eval(&["*"]),
        Err(EvalError::InsufficientOperands {
            op: '*',
            available: 0,
            position: 0,
        })
    );
}

#[test]
fn test_insufficient_operands_later_in_expression() {
    assert_eq!(
        eval(&["1", "2", "+", "-"]),
        Err(EvalError::InsufficientOperands {
            op: '-',
            available: 1,
            position: 3,
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// DivisionByZero
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_division_by_zero() {
    assert_eq!(
        eval(&["10", "0", "/"]),
        Err(EvalError::DivisionByZero { position: 2 })
    );
}

#[test]
fn test_division_by_computed_zero() {
    assert_eq!(
        eval(&["1", "3", "3", "-", "/"]),
        Err(EvalError::DivisionByZero { position: 4 })
    );
}

#[test]
fn test_zero_dividend_is_fine() {
    assert_eq!(eval(&["0", "5", "/"]), Ok(0));
}

// ═══════════════════════════════════════════════════════════════════════
// TooManyOperands
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_too_many_operands() {
    assert_eq!(
        eval(&["1", "2"]),
        Err(EvalError::TooManyOperands { remaining: 2 })
    );
}

#[test]
fn test_too_many_operands_after_operators() {
    assert_eq!(
        eval(&["1", "2", "3", "+"]),
        Err(EvalError::TooManyOperands { remaining: 2 })
    );
}

#[test]
fn test_empty_input() {
    let empty: [&str; 0] = [];
    assert_eq!(
        evaluate(&empty),
        Err(EvalError::TooManyOperands { remaining: 0 })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// IntegerOverflow
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_integer_overflow() {
    assert_eq!(
        eval(&["9223372036854775807", "1", "+"]),
        Err(EvalError::IntegerOverflow {
            op: '+',
            position: 2
        })
    );
    assert_eq!(
        eval(&["-9223372036854775808", "-1", "/"]),
        Err(EvalError::IntegerOverflow {
            op: '/',
            position: 2
        })
    );
    assert_eq!(
        eval(&["4611686018427387904", "2", "*"]),
        Err(EvalError::IntegerOverflow {
            op: '*',
            position: 2
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// StackLimitExceeded
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_stack_limit_exceeded() {
    let ctx = EvalContext::with_max_stack_depth(2);
    assert_eq!(
        evaluate_with(&["1", "2", "3", "+", "+"], &ctx),
        Err(EvalError::StackLimitExceeded {
            limit: 2,
            position: 2,
        })
    );
}

#[test]
fn test_stack_limit_not_hit_by_reduction() {
    let ctx = EvalContext::with_max_stack_depth(2);
    assert_eq!(evaluate_with(&["1", "2", "+", "3", "+"], &ctx), Ok(6));
}

// ═══════════════════════════════════════════════════════════════════════
// Error Display and Positions
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_error_display() {
    let err = eval(&["10", "0", "/"]).unwrap_err();
    assert_eq!(err.to_string(), "Division by zero at token 2");
    assert_eq!(err.position(), Some(2));
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(EvalError::TooManyOperands { remaining: 2 });
    assert_eq!(
        err.to_string(),
        "Expected exactly one value after evaluation, found 2"
    );
}
