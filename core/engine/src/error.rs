//! FILENAME: core/engine/src/error.rs

use calc_parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}
