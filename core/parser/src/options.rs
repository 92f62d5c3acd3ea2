//! FILENAME: core/parser/src/options.rs
//! PURPOSE: Caller-supplied settings that control how strictly input is accepted.
//! CONTEXT: There is no config file or environment lookup; callers build a
//! ParseOptions value (or take the default) and pass it to parse_with.

use serde::{Deserialize, Serialize};

/// Default limit on recursive parse depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How the lexer treats characters outside the expression alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LexMode {
    /// Fail with `LexError::UnrecognizedCharacter`.
    #[default]
    Strict,
    /// Drop the character and keep scanning.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub lex_mode: LexMode,
    /// Accept tokens left over after a complete expression instead of failing
    /// with `ParseError::TrailingInput`.
    pub allow_trailing_input: bool,
    /// Maximum recursion depth of the parser; `None` disables the check.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            lex_mode: LexMode::Strict,
            allow_trailing_input: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    /// Settings that accept everything the permissive legacy behaviour
    /// accepted: unknown characters are skipped, trailing tokens ignored and
    /// nesting is unbounded.
    pub fn compatible() -> Self {
        ParseOptions {
            lex_mode: LexMode::Lenient,
            allow_trailing_input: true,
            max_depth: None,
        }
    }

    pub fn with_lex_mode(mut self, lex_mode: LexMode) -> Self {
        self.lex_mode = lex_mode;
        self
    }

    pub fn with_trailing_input(mut self, allow: bool) -> Self {
        self.allow_trailing_input = allow;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
