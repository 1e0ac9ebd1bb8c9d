//! Output formats for check reports and token listings
//!
//!     text  - the human-readable rendering: numbered lines, carets under errors, summary
//!     json  - pretty-printed serde_json of the same data

pub mod json;
pub mod text;

use crate::dtd::checker::Report;
use crate::dtd::error::LexError;
use crate::dtd::token::Token;
use std::fmt;
use std::str::FromStr;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No format by that name
    FormatNotFound(String),
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Simple,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["simple", "json"];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
        }
    }

    pub fn render_report(self, report: &Report) -> Result<String, FormatError> {
        match self {
            OutputFormat::Simple => Ok(text::render_report(report)),
            OutputFormat::Json => json::render_report(report),
        }
    }

    pub fn render_tokens(self, tokens: &[Result<Token, LexError>]) -> Result<String, FormatError> {
        match self {
            OutputFormat::Simple => Ok(text::render_tokens(tokens)),
            OutputFormat::Json => json::render_tokens(tokens),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FormatError::FormatNotFound(name.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
