//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a sequence of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It skips
//! whitespace, collapses digit runs into Number tokens and maps each operator
//! or parenthesis to its own token. The whole input is tokenized before the
//! parser starts.
//!
//! SUPPORTED CHARACTERS:
//! - Digits 0-9 (integer literals only, no decimal point or exponent)
//! - Single char: + - * / ^ ( )
//! - Whitespace (ignored)

use crate::error::LexError;
use crate::options::LexMode;
use crate::token::{Token, TokenKind};
use log::{debug, trace};
use std::iter::Peekable;
use std::str::CharIndices;

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer::with_mode(input, LexMode::Strict)
    }

    pub fn with_mode(input: &'a str, mode: LexMode) -> Self {
        Lexer {
            input,
            chars: input.char_indices().peekable(),
            mode,
        }
    }

    /// Advances the lexer and returns the next token.
    /// Once the input is exhausted every call yields `EndOfInput`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.skip_whitespace();

            let Some((position, ch)) = self.chars.next() else {
                return Ok(Token::end_of_input(self.input.len()));
            };

            if ch.is_ascii_digit() {
                return Ok(self.read_number(position));
            }

            if let Some(kind) = TokenKind::from_char(ch) {
                return Ok(Token::new(kind, position));
            }

            match self.mode {
                LexMode::Strict => {
                    return Err(LexError::UnrecognizedCharacter {
                        character: ch,
                        position,
                    });
                }
                LexMode::Lenient => {
                    debug!(
                        target: "LEXER",
                        "dropping unrecognized character {:?} at offset {}",
                        ch,
                        position
                    );
                }
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    /// Reads a maximal run of ASCII digits starting at `start`.
    fn read_number(&mut self, start: usize) -> Token {
        let mut end = start + 1;

        while let Some(&(idx, ch)) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            end = idx + ch.len_utf8();
            self.chars.next();
        }

        Token::number(&self.input[start..end], start)
    }
}

/// Tokenizes the whole input in strict mode.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(input, LexMode::Strict)
}

/// Tokenizes the whole input. The result always ends with exactly one
/// `EndOfInput` token.
pub fn tokenize_with(input: &str, mode: LexMode) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::with_mode(input, mode);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.is_end();
        tokens.push(token);
        if done {
            break;
        }
    }

    trace!(target: "LEXER", "tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}
