//! Main module for DTD checking functionality
//!
//! Leaf-first layout:
//!
//!     token     - token kinds and the immutable token record
//!     lexing    - rule tables, parameter-entity table and the lexer session
//!     parsing   - lookahead primitives, declaration handlers and recovery
//!     events    - the observer interface used to surface lines, diagnostics and traces
//!     error     - the error taxonomy shared by lexer and parser
//!     config    - check options
//!     checker   - session-level entry points
//!     formats   - text and JSON rendering of reports and token listings

pub mod checker;
pub mod config;
pub mod error;
pub mod events;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod token;

pub use checker::{check, check_lines, source_lines, tokens, Report};
pub use config::CheckOptions;
pub use error::{CheckError, ErrorKind};
pub use token::{Location, Token, TokenKind};
