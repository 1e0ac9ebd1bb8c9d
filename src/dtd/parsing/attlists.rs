//! Attribute-list declarations
//!
//!     AttlistDecl ::= '<!ATTLIST' S Name AttDef* S? '>'
//!     AttDef      ::= S Name S AttType S DefaultDecl
//!     AttType     ::= 'CDATA' | 'ID' | 'IDREF' | 'IDREFS' | 'ENTITY' | 'ENTITIES'
//!                   | 'NMTOKEN' | 'NMTOKENS' | NotationType | Enumeration
//!     DefaultDecl ::= '#REQUIRED' | '#IMPLIED' | (('#FIXED' S)? AttValue)
//!
//! At least one definition is required. Definitions may be split across lines, and a
//! parameter-entity reference may stand in for any number of them.

use super::parser::{PResult, Parser};
use crate::dtd::events::EventSink;
use crate::dtd::token::TokenKind;

impl<S: EventSink> Parser<S> {
    pub(super) fn attlist_decl(&mut self) -> PResult {
        self.consume()?;
        self.require_whitespace()?;
        self.match_name_or_pe_ref()?;
        self.skip_whitespace()?;
        loop {
            if self.expect(TokenKind::PeRef) {
                self.consume()?;
                self.skip_whitespace()?;
            } else {
                self.attribute_definition()?;
            }
            if self.expect(TokenKind::EndRule) {
                break;
            }
        }
        self.consume()
    }

    fn attribute_definition(&mut self) -> PResult {
        self.match_name_or_pe_ref()?;
        self.require_whitespace()?;
        self.attribute_type()?;
        self.require_whitespace()?;
        self.default_declaration()?;
        self.skip_whitespace()
    }

    fn attribute_type(&mut self) -> PResult {
        match self.peek_kind() {
            Some(TokenKind::Cdata)
            | Some(TokenKind::Id)
            | Some(TokenKind::Idrefs)
            | Some(TokenKind::Entities)
            | Some(TokenKind::Nmtokens) => self.consume(),
            Some(TokenKind::Notation) => self.notation_type(),
            Some(TokenKind::LParen) => self.enumeration(),
            _ => Err(self.unexpected("attribute type")),
        }
    }

    /// NotationType ::= 'NOTATION' S '(' S? Name (S? '|' S? Name)* S? ')'
    fn notation_type(&mut self) -> PResult {
        self.consume()?;
        self.require_whitespace()?;
        self.match_token(TokenKind::LParen)?;
        self.skip_whitespace()?;
        self.match_name_or_pe_ref()?;
        self.skip_whitespace()?;
        while self.expect(TokenKind::Pipe) {
            self.consume()?;
            self.skip_whitespace()?;
            self.match_name_or_pe_ref()?;
            self.skip_whitespace()?;
        }
        self.match_token(TokenKind::RParen)
    }

    /// Enumeration ::= '(' S? Nmtoken (S? '|' S? Nmtoken)* S? ')'
    fn enumeration(&mut self) -> PResult {
        self.consume()?;
        self.skip_whitespace()?;
        self.match_nmtoken()?;
        self.skip_whitespace()?;
        while self.expect(TokenKind::Pipe) {
            self.consume()?;
            self.skip_whitespace()?;
            self.match_nmtoken()?;
            self.skip_whitespace()?;
        }
        self.match_token(TokenKind::RParen)
    }

    fn match_nmtoken(&mut self) -> PResult {
        match self.peek_kind() {
            Some(kind) if kind == TokenKind::Nmtoken || kind.is_name_like() => self.consume(),
            _ => Err(self.unexpected("NMTOKEN")),
        }
    }

    fn default_declaration(&mut self) -> PResult {
        match self.peek_kind() {
            Some(TokenKind::Required) | Some(TokenKind::Implied) => self.consume(),
            Some(TokenKind::Fixed) => {
                self.consume()?;
                self.require_whitespace()?;
                self.match_token(TokenKind::Literal)
            }
            Some(TokenKind::Literal) => self.consume(),
            _ => Err(self.unexpected("#REQUIRED, #IMPLIED, #FIXED or string")),
        }
    }
}
