//! Error types for lexing and parsing
//!
//! Declaration handlers never catch these; they propagate with `?` up to the parser's
//! top-level loop, which counts them, reports them and recovers.

use crate::dtd::token::{Location, Token};
use serde::{Deserialize, Serialize};
use std::fmt;

/// No lexical rule matched at a position inside a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    /// The unmatched remainder of the line
    pub text: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to lex line {} at position {} [ {} ]",
            self.line, self.column, self.text
        )
    }
}

impl std::error::Error for LexError {}

/// Tag identifying the kind of a [CheckError], carried by diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Lex,
    UnexpectedToken,
    UnexpectedEof,
    UnterminatedRule,
    UnterminatedComment,
    InvalidEntityValue,
}

/// Errors raised while checking a DTD
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    Lex(LexError),
    /// Expected `expected`, found some other token
    UnexpectedToken { expected: String, found: Token },
    /// A required token is missing at end of input
    UnexpectedEof { expected: String },
    /// Recovery or a body skip ran out of input before the closing delimiter
    UnterminatedRule { start: Location },
    UnterminatedComment { start: Location },
    /// A parameter-entity value contains a double quote
    InvalidEntityValue { name: String, value: String },
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Lex(_) => ErrorKind::Lex,
            CheckError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            CheckError::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            CheckError::UnterminatedRule { .. } => ErrorKind::UnterminatedRule,
            CheckError::UnterminatedComment { .. } => ErrorKind::UnterminatedComment,
            CheckError::InvalidEntityValue { .. } => ErrorKind::InvalidEntityValue,
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Lex(err) => write!(f, "{}.", err),
            CheckError::UnexpectedToken { expected, found } => write!(
                f,
                "Expecting {}, found {} at position {}.",
                expected, found.lexeme, found.column
            ),
            CheckError::UnexpectedEof { expected } => {
                write!(f, "Expecting {} : Unexpected EOF", expected)
            }
            CheckError::UnterminatedRule { start } => {
                write!(f, "Rule starting {} not closed.", start)
            }
            CheckError::UnterminatedComment { start } => {
                write!(f, "Comment near {} not closed.", start)
            }
            CheckError::InvalidEntityValue { name, value } => write!(
                f,
                "Invalid string value for parameter entity %{};, contains a double quote: {}",
                name, value
            ),
        }
    }
}

impl std::error::Error for CheckError {}

impl From<LexError> for CheckError {
    fn from(err: LexError) -> Self {
        CheckError::Lex(err)
    }
}
