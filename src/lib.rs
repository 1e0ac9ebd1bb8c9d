//! # dtdcheck
//!
//! A grammar checker for DTD internal subsets.
//!
//! The checker lexes DTD source line by line, expands internal parameter
//! entity references as it goes, and walks the token stream with a
//! recursive-descent parser that recovers after every malformed declaration.
//! See the [dtd module](dtd) for the component layout.

pub mod dtd;
