//! Parser
//!
//! A recursive-descent checker over the lexer's token stream, one lookahead token deep.
//!
//!     parser    - the session: primitives, top-level loop, error reporting and recovery
//!     elements  - <!ELEMENT ...> and content models
//!     attlists  - <!ATTLIST ...>
//!     entities  - <!ENTITY ...>, registering internal parameter entities with the lexer
//!     markup    - comments, processing instructions and <!NOTATION ...>, skipped unchecked
//!
//! Each declaration family is an `impl Parser` block in its own file. Handlers return
//! `Err` at the first problem and never report directly; the top-level loop counts the
//! error, emits a diagnostic and skips to the next `>`.

pub mod attlists;
pub mod elements;
pub mod entities;
pub mod markup;
pub mod parser;

pub use parser::{PResult, Parser};
