//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error types raised while lexing and parsing an expression.

use crate::token::TokenKind;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LexError {
    #[error("unrecognized character '{character}' at offset {position}")]
    UnrecognizedCharacter { character: char, position: usize },
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// No prefix rule exists for the token where an operand was expected.
    #[error("unexpected token '{found}' at offset {position}")]
    UnexpectedToken { found: TokenKind, position: usize },

    /// `position` points at the opening parenthesis.
    #[error("parenthesis opened at offset {position} is never closed")]
    UnclosedParenthesis { position: usize },

    #[error("unexpected trailing input '{found}' at offset {position}")]
    TrailingInput { found: TokenKind, position: usize },

    #[error("invalid number literal: {literal}")]
    InvalidNumber { literal: String },

    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Fieldless mirror of [`ParseError`] for matching on the failure class only.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseErrorKind {
    Lex,
    UnexpectedToken,
    UnclosedParenthesis,
    TrailingInput,
    InvalidNumber,
    NestingTooDeep,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::Lex(_) => ParseErrorKind::Lex,
            ParseError::UnexpectedToken { .. } => ParseErrorKind::UnexpectedToken,
            ParseError::UnclosedParenthesis { .. } => ParseErrorKind::UnclosedParenthesis,
            ParseError::TrailingInput { .. } => ParseErrorKind::TrailingInput,
            ParseError::InvalidNumber { .. } => ParseErrorKind::InvalidNumber,
            ParseError::NestingTooDeep { .. } => ParseErrorKind::NestingTooDeep,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
