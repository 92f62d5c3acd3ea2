//! FILENAME: tests/test_expressions.rs
//! Integration tests for the lex --> parse --> evaluate pipeline.

use calc_engine::{
    evaluate, parse, parse_and_evaluate, parse_and_evaluate_with, EngineError, Expression,
    LexMode, ParseErrorKind, ParseOptions,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn eval(input: &str) -> f64 {
    parse_and_evaluate(input).unwrap_or_else(|e| panic!("{input:?} failed: {e}"))
}

fn error_kind(input: &str) -> ParseErrorKind {
    match parse_and_evaluate(input) {
        Err(EngineError::Parse(e)) => e.kind(),
        Ok(v) => panic!("{input:?} unexpectedly evaluated to {v}"),
    }
}

// ============================================================================
// ASSOCIATIVITY AND PRECEDENCE
// ============================================================================

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(eval("1-2-3"), -4.0);
    assert_eq!(eval("100/10/5"), 2.0);
}

#[test]
fn test_exponent_is_right_associative() {
    assert_eq!(eval("2^3^2"), 512.0);
}

#[test]
fn test_unary_minus_binds_before_exponent() {
    // (-2)^2, not -(2^2)
    assert_eq!(eval("-2^2"), 4.0);
    assert_eq!(eval("-(2^2)"), -4.0);
    assert_eq!(eval("-2^3"), -8.0);
    assert_eq!(eval("2^-1"), 0.5);
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(eval("(1+2)*3"), 9.0);
    assert_eq!(eval("1+2*3"), 7.0);
}

#[test]
fn test_multi_digit_literals() {
    assert_eq!(eval("12+3"), 15.0);
    assert_eq!(eval("1000*1000"), 1_000_000.0);
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(parse("1 + 2").unwrap(), parse("1+2").unwrap());
    assert_eq!(eval("1 + 2"), eval("1+2"));
    assert_eq!(eval("\t 2 ^\n 3 "), 8.0);
}

#[test]
fn test_reference_expression() {
    assert_eq!(eval("1+(2+3^2)*2"), 23.0);
}

#[test]
fn test_mixed_unary_and_binary() {
    assert_eq!(eval("-3*-3"), 9.0);
    assert_eq!(eval("1--1"), 2.0);
    assert_eq!(eval("-(1+2)*4"), -12.0);
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_render_then_reparse_preserves_value() {
    let inputs = [
        "1-2-3",
        "2^3^2",
        "-2^2",
        "(1+2)*3",
        "1+(2+3^2)*2",
        "7/2/2",
        "-(4-10)^2/3",
        "2^-2*8",
    ];

    for input in inputs {
        let tree = parse(input).unwrap();
        let rendered = tree.to_string();
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(evaluate(&reparsed), evaluate(&tree), "{input} --> {rendered}");
        assert_eq!(reparsed.to_string(), rendered);
    }
}

#[test]
fn test_largest_literals_render_and_reparse() {
    let input = format!("{}*2", "9".repeat(300));
    let tree = parse(&input).unwrap();
    let reparsed = parse(&tree.to_string()).unwrap();
    assert_eq!(reparsed, tree);
    assert!(evaluate(&reparsed).is_finite());
}

#[test]
fn test_render_format() {
    assert_eq!(parse("1+(2+3^2)*2").unwrap().to_string(), "(1 + ((2 + (3 ^ 2)) * 2))");
    assert_eq!(parse("-5").unwrap().to_string(), "(-5)");
    assert_eq!(parse("5").unwrap().to_string(), "5");
}

#[test]
fn test_tree_survives_json_round_trip() {
    let tree = parse("-(4-10)^2/3").unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: Expression = serde_json::from_str(&json).unwrap();
    assert_eq!(evaluate(&back), 12.0);
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_unclosed_parenthesis() {
    assert_eq!(error_kind("(1+2"), ParseErrorKind::UnclosedParenthesis);
}

#[test]
fn test_empty_and_operator_only_input() {
    assert_eq!(error_kind(""), ParseErrorKind::UnexpectedToken);
    assert_eq!(error_kind("+"), ParseErrorKind::UnexpectedToken);
    assert_eq!(error_kind(")"), ParseErrorKind::UnexpectedToken);
}

#[test]
fn test_trailing_input() {
    assert_eq!(error_kind("1 2"), ParseErrorKind::TrailingInput);
    assert_eq!(error_kind("(1))"), ParseErrorKind::TrailingInput);
}

#[test]
fn test_unrecognized_character() {
    assert_eq!(error_kind("1 $+ 2"), ParseErrorKind::Lex);
    assert_eq!(error_kind("1.5"), ParseErrorKind::Lex);

    let lenient = ParseOptions::default().with_lex_mode(LexMode::Lenient);
    assert_eq!(parse_and_evaluate_with("1 $+ 2", &lenient).unwrap(), 3.0);
}

#[test]
fn test_deep_nesting_is_rejected() {
    let input = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert_eq!(error_kind(&input), ParseErrorKind::NestingTooDeep);
}

#[test]
fn test_long_flat_chain_is_rejected() {
    let input = vec!["1"; 10_000].join("+");
    assert_eq!(error_kind(&input), ParseErrorKind::NestingTooDeep);
    assert_eq!(eval(&vec!["1"; 200].join("+")), 200.0);
}

#[test]
fn test_overflowing_literal_is_rejected() {
    let input = "9".repeat(400);
    assert_eq!(error_kind(&input), ParseErrorKind::InvalidNumber);
    assert_eq!(error_kind(&format!("0*{input}")), ParseErrorKind::InvalidNumber);
}

// ============================================================================
// IEEE-754 RESULTS
// ============================================================================

#[test]
fn test_division_by_zero_is_not_an_error() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert_eq!(eval("-1/0"), f64::NEG_INFINITY);
    assert!(eval("0/0").is_nan());
    assert!(eval("(1/0)-(1/0)").is_nan());
}

#[test]
fn test_fractional_power_of_negative_base_is_nan() {
    assert!(eval("(0-8)^(1/3)").is_nan());
    assert_eq!(eval("4^(1/2)"), 2.0);
}


// ============================================================================
// INDEPENDENCE
// ============================================================================

#[test]
fn test_concurrent_parses_are_independent() {
    let handles: Vec<_> = (1..=8)
        .map(|n| {
            std::thread::spawn(move || {
                let input = format!("{n}*({n}+1)/2");
                parse_and_evaluate(&input).unwrap()
            })
        })
        .collect();

    for (n, handle) in (1..=8).zip(handles) {
        let expected = f64::from(n * (n + 1) / 2);
        assert_eq!(handle.join().unwrap(), expected);
    }
}
