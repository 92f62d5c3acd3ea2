//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Composes the parser crate and the evaluator into a single
//! parse-then-evaluate call, and re-exports the types a caller needs to
//! inspect or serialize the tree between the two phases.

pub mod error;
pub mod evaluator;

use log::debug;

// Re-export commonly used types at the crate root
pub use calc_parser::{
    parse, parse_with, BinaryOperator, Expression, LexError, LexMode, ParseError, ParseErrorKind,
    ParseOptions, UnaryOperator,
};
pub use error::EngineError;
pub use evaluator::{evaluate, Evaluator};

/// Parses and evaluates an expression with the default (strict) options.
///
/// Parse failures are returned as errors; numeric edge cases such as
/// division by zero come back as IEEE-754 special values.
pub fn parse_and_evaluate(expression: &str) -> Result<f64, EngineError> {
    parse_and_evaluate_with(expression, &ParseOptions::default())
}

pub fn parse_and_evaluate_with(
    expression: &str,
    options: &ParseOptions,
) -> Result<f64, EngineError> {
    let tree = parse_with(expression, options)?;
    let value = evaluate(&tree);
    debug!(target: "ENGINE", "{} = {}", tree, value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_evaluates_reference_expression() {
        assert_eq!(parse_and_evaluate("1+(2+3^2)*2").unwrap(), 23.0);
    }

    #[test]
    fn it_wraps_parse_errors() {
        let err = parse_and_evaluate("(1+2").unwrap_err();
        assert_eq!(err, EngineError::Parse(ParseError::UnclosedParenthesis { position: 0 }));
        assert_eq!(
            err.to_string(),
            "parse error: parenthesis opened at offset 0 is never closed"
        );
    }

    #[test]
    fn it_passes_options_through() {
        let options = ParseOptions::compatible();
        assert_eq!(parse_and_evaluate_with("2 x* 4", &options).unwrap(), 8.0);
        assert!(parse_and_evaluate("2 x* 4").is_err());
    }
}
