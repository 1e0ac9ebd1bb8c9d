//! Lexer
//!
//! Turns a sequence of source lines into a restartable token stream.
//!
//!     rules     - the ordered normal-mode and comment-mode rule tables
//!     entities  - the per-session parameter-entity table
//!     lexer     - the session: line advancing, first-match lexing, mode switching and
//!                 parameter-entity substitution
//!
//! The lexer is unaware of grammar structure. It only knows which rule table is active, and
//! it flips between them on `<!--` and `-->`.

pub mod entities;
pub mod lexer;
pub mod rules;

pub use crate::dtd::error::LexError;
pub use entities::ParameterEntities;
pub use lexer::{Lexer, Mode};
