//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

use serde::{Deserialize, Serialize};

/// The closed set of token kinds the lexer can produce.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    Number,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Caret,

    // Delimiters
    LParen,
    RParen,

    // Special
    EndOfInput,
}

impl TokenKind {
    /// Maps a single source character to its token kind.
    /// Digits are not handled here since numbers span several characters.
    pub fn from_char(ch: char) -> Option<TokenKind> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '^' => Some(TokenKind::Caret),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A `(kind, literal)` pair plus the byte offset where the token starts.
/// `literal` is only populated for `Number` tokens.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<String>,
    pub position: usize,
}

impl Token {
    /// Creates a non-literal token (operators, delimiters, end of input).
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Token {
            kind,
            literal: None,
            position,
        }
    }

    /// Creates a `Number` token holding the raw digit string.
    pub fn number(literal: impl Into<String>, position: usize) -> Self {
        Token {
            kind: TokenKind::Number,
            literal: Some(literal.into()),
            position,
        }
    }

    pub fn end_of_input(position: usize) -> Self {
        Token::new(TokenKind::EndOfInput, position)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.literal) {
            (TokenKind::Number, Some(literal)) => write!(f, "{}", literal),
            (TokenKind::EndOfInput, _) => write!(f, "EOF"),
            (kind, _) => write!(f, "{}", kind),
        }
    }
}
