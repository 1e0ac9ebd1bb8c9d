//! Token types shared by the lexer, the parser and the renderers.
//!
//!     A token is the exact substring matched by one lexer rule, tagged with the rule's kind
//!     and the position where the match began. Tokens are produced once by the lexer and
//!     handed to the parser by value.
//!
//!     The kind set is closed. Reserved words get their own kinds even though the grammar lets
//!     most of them act as ordinary names outside their keyword context; the parser decides
//!     that positionally (see [TokenKind::is_name_keyword]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every token the lexer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `<!--`
    CommentStart,
    /// `-->`
    CommentEnd,
    /// A run of comment body, only produced in comment mode
    CommentText,
    /// `<?`
    PiStart,
    /// `?>`
    PiEnd,
    /// `>`
    EndRule,
    LParen,
    RParen,
    Comma,
    Pipe,
    /// A bare `%`, as in `<!ENTITY % name ...>`
    Percent,
    /// `<!ELEMENT`
    ElementDecl,
    /// `<!ATTLIST`
    AttlistDecl,
    /// `<!ENTITY`
    EntityDecl,
    /// `<!NOTATION`
    NotationDecl,
    Any,
    Empty,
    Pcdata,
    Cdata,
    Id,
    /// `IDREF` or `IDREFS`
    Idrefs,
    /// `ENTITY` or `ENTITIES`
    Entities,
    /// `NMTOKEN` or `NMTOKENS`
    Nmtokens,
    /// The `NOTATION` attribute type
    Notation,
    Required,
    Implied,
    Fixed,
    System,
    Public,
    Ndata,
    /// `*`, `+` or `?`; the operator is the lexeme
    Repetition,
    Name,
    /// A name-token that is not a valid Name (e.g. starts with a digit)
    Nmtoken,
    /// A single- or double-quoted string
    Literal,
    Whitespace,
    /// A parameter-entity reference, `%name;`
    PeRef,
    /// Anything no other rule accepts
    Unknown,
}

impl TokenKind {
    /// Human-readable description used in diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::CommentStart => "<!--",
            TokenKind::CommentEnd => "-->",
            TokenKind::CommentText => "..in comment..",
            TokenKind::PiStart => "<?",
            TokenKind::PiEnd => "?>",
            TokenKind::EndRule => ">",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Pipe => "|",
            TokenKind::Percent => "%",
            TokenKind::ElementDecl => "<!ELEMENT",
            TokenKind::AttlistDecl => "<!ATTLIST",
            TokenKind::EntityDecl => "<!ENTITY",
            TokenKind::NotationDecl => "<!NOTATION",
            TokenKind::Any => "ANY",
            TokenKind::Empty => "EMPTY",
            TokenKind::Pcdata => "#PCDATA",
            TokenKind::Cdata => "CDATA",
            TokenKind::Id => "ID",
            TokenKind::Idrefs => "IDREF/IDREFS",
            TokenKind::Entities => "ENTITY/ENTITIES",
            TokenKind::Nmtokens => "NMTOKEN/NMTOKENS",
            TokenKind::Notation => "NOTATION",
            TokenKind::Required => "#REQUIRED",
            TokenKind::Implied => "#IMPLIED",
            TokenKind::Fixed => "#FIXED",
            TokenKind::System => "SYSTEM",
            TokenKind::Public => "PUBLIC",
            TokenKind::Ndata => "NDATA",
            TokenKind::Repetition => "+, *, or ?",
            TokenKind::Name => "name",
            TokenKind::Nmtoken => "token",
            TokenKind::Literal => "string",
            TokenKind::Whitespace => "whitespace",
            TokenKind::PeRef => "parameter entity reference",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Keywords that the grammar lets stand in for a Name outside their keyword position.
    pub fn is_name_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Any
                | TokenKind::Cdata
                | TokenKind::Empty
                | TokenKind::Entities
                | TokenKind::Idrefs
                | TokenKind::Id
                | TokenKind::Ndata
                | TokenKind::Nmtokens
                | TokenKind::Notation
                | TokenKind::Public
                | TokenKind::System
        )
    }

    /// Kinds accepted where a Name is structurally expected
    pub fn is_name_like(self) -> bool {
        self == TokenKind::Name || self == TokenKind::PeRef || self.is_name_keyword()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A line/column position in the (possibly substituted) source.
///
/// `line` is 1-based; `column` is the 0-based byte offset within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, position {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Position just past the last byte of the lexeme
    pub fn end(&self) -> Location {
        Location::new(self.line, self.column + self.lexeme.len())
    }

    /// Text between the quotes of a [TokenKind::Literal]
    pub fn literal_value(&self) -> &str {
        let inner = self.lexeme.len().saturating_sub(1);
        self.lexeme.get(1..inner).unwrap_or("")
    }

    /// Name inside a `%name;` reference
    pub fn reference_name(&self) -> &str {
        self.lexeme
            .strip_prefix('%')
            .and_then(|rest| rest.strip_suffix(';'))
            .unwrap_or(&self.lexeme)
    }

    /// Whether `other` starts exactly where this token ends
    pub fn is_adjacent_to(&self, other: &Token) -> bool {
        self.end() == other.location()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ {}: {} ({},{}) ]",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_value_strips_quotes() {
        let token = Token::new(TokenKind::Literal, "\"(a|b)\"", 1, 20);
        assert_eq!(token.literal_value(), "(a|b)");

        let token = Token::new(TokenKind::Literal, "''", 1, 0);
        assert_eq!(token.literal_value(), "");
    }

    #[test]
    fn test_reference_name() {
        let token = Token::new(TokenKind::PeRef, "%content.model;", 3, 4);
        assert_eq!(token.reference_name(), "content.model");
    }

    #[test]
    fn test_adjacency() {
        let first = Token::new(TokenKind::Literal, "\"has \"", 1, 14);
        let second = Token::new(TokenKind::Literal, "\" quote\"", 1, 20);
        assert!(first.is_adjacent_to(&second));

        let spaced = Token::new(TokenKind::Literal, "\" quote\"", 1, 21);
        assert!(!first.is_adjacent_to(&spaced));
    }

    #[test]
    fn test_keywords_usable_as_names() {
        assert!(TokenKind::Any.is_name_like());
        assert!(TokenKind::PeRef.is_name_like());
        assert!(!TokenKind::Pcdata.is_name_like());
        assert!(!TokenKind::Required.is_name_like());
        assert!(!TokenKind::Nmtoken.is_name_like());
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Name, "foo", 2, 10);
        insta::assert_snapshot!(token.to_string(), @"[ name: foo (2,10) ]");
    }
}
