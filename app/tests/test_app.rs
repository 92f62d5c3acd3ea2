//! FILENAME: tests/test_app.rs
//! Integration tests for the calc binary's library half.

use calc_app::{evaluate_expression, EXPRESSION};
use calc_engine::{EngineError, ParseErrorKind};

#[test]
fn test_builtin_expression_evaluates_to_23() {
    assert_eq!(evaluate_expression(EXPRESSION).unwrap(), 23.0);
}

#[test]
fn test_parse_failures_are_returned() {
    let EngineError::Parse(err) = evaluate_expression("(1+2").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnclosedParenthesis);
}

#[test]
fn test_runs_without_logger_installed() {
    // Logging calls are no-ops until logging::init runs.
    assert_eq!(evaluate_expression("2^3^2").unwrap(), 512.0);
}
