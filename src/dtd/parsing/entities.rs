//! Entity declarations
//!
//!     EntityDecl ::= '<!ENTITY' S Name S EntityDef S? '>'
//!                  | '<!ENTITY' S '%' S Name S PEDef S? '>'
//!
//! Only internal parameter entities are interpreted: their quoted value is checked and
//! registered with the lexer, so later `%name;` references expand to it. Any other entity
//! body (general entities, external identifiers) is skipped up to the closing `>` with a
//! notice.

use super::parser::{PResult, Parser};
use crate::dtd::error::CheckError;
use crate::dtd::events::EventSink;
use crate::dtd::lexing::ParameterEntities;
use crate::dtd::token::{Location, TokenKind};

impl<S: EventSink> Parser<S> {
    pub(super) fn entity_decl(&mut self) -> PResult {
        let start = self.position();
        self.consume()?;
        self.require_whitespace()?;
        match self.peek_kind() {
            Some(TokenKind::Percent) => self.parameter_entity_decl(start),
            Some(kind) if kind.is_name_like() => {
                self.consume()?;
                self.require_whitespace()?;
                self.skip_entity_body("<!ENTITY", start)
            }
            _ => Err(self.unexpected("entity name or %")),
        }
    }

    fn parameter_entity_decl(&mut self, start: Location) -> PResult {
        self.consume()?;
        self.require_whitespace()?;
        let name = self.current(TokenKind::Name.describe())?;
        if name.kind != TokenKind::Name && !name.kind.is_name_keyword() {
            return Err(self.unexpected(TokenKind::Name.describe()));
        }
        self.consume()?;
        self.require_whitespace()?;
        if self.expect(TokenKind::Literal) {
            self.parameter_entity_value(&name.lexeme)
        } else {
            self.skip_entity_body("<!ENTITY %", start)
        }
    }

    /// A quoted replacement text, then `S? >`
    fn parameter_entity_value(&mut self, name: &str) -> PResult {
        let literal = self.current(TokenKind::Literal.describe())?;
        ParameterEntities::validate(name, literal.literal_value())?;
        self.consume()?;
        // `"a "" b"` lexes as two literals back to back
        if let Some(next) = &self.lookahead {
            if next.kind == TokenKind::Literal && literal.is_adjacent_to(next) {
                return Err(CheckError::InvalidEntityValue {
                    name: name.to_string(),
                    value: format!("{}\"\"{}", literal.literal_value(), next.literal_value()),
                });
            }
        }
        self.lexer
            .register_parameter_entity(name, literal.literal_value())?;
        self.skip_whitespace()?;
        self.match_token(TokenKind::EndRule)
    }

    /// Skips an uninterpreted entity body. The body may not be empty.
    fn skip_entity_body(&mut self, opener: &str, start: Location) -> PResult {
        if self.at_eof() || self.expect(TokenKind::EndRule) {
            return Err(self.unexpected("entity definition"));
        }
        self.notice(format!("Not parsing contents of {}, skipping to >", opener));
        self.skip_past(TokenKind::EndRule, start)
    }
}
