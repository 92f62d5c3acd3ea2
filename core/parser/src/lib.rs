//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the arithmetic expression parser.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to convert expression strings into evaluatable expression trees.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Non-negative integer literals: 0, 42, 1234
//! - Arithmetic: +, -, *, /, ^ (power, right-associative)
//! - Unary negation: -5 (binds tighter than every binary operator)
//! - Parentheses for grouping

pub mod ast;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod precedence;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression, UnaryOperator};
pub use error::{LexError, ParseError, ParseErrorKind, ParseResult};
pub use lexer::{tokenize, tokenize_with, Lexer};
pub use options::{LexMode, ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::{parse, parse_tokens, parse_with, Parser};
pub use precedence::{Associativity, Precedence};
pub use token::{Token, TokenKind};
