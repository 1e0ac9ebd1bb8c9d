//! Element type declarations
//!
//!     elementdecl ::= '<!ELEMENT' S Name S contentspec S? '>'
//!     contentspec ::= 'EMPTY' | 'ANY' | Mixed | children
//!     Mixed       ::= '(' S? '#PCDATA' (S? '|' S? Name)* S? ')*'
//!                   | '(' S? '#PCDATA' S? ')' '*'?
//!     children    ::= (choice | seq) ('?' | '*' | '+')?
//!     cp          ::= (Name | choice | seq) ('?' | '*' | '+')?
//!
//! Wherever a Name is allowed, an unresolved parameter-entity reference is accepted in its
//! place. Inside a group the separator is fixed by the first one seen.

use super::parser::{PResult, Parser};
use crate::dtd::events::EventSink;
use crate::dtd::token::TokenKind;

impl<S: EventSink> Parser<S> {
    pub(super) fn element_decl(&mut self) -> PResult {
        self.consume()?;
        self.require_whitespace()?;
        self.match_name_or_pe_ref()?;
        self.require_whitespace()?;
        match self.peek_kind() {
            Some(TokenKind::Any) | Some(TokenKind::Empty) | Some(TokenKind::PeRef) => {
                self.consume()?
            }
            Some(TokenKind::LParen) => self.content_model()?,
            _ => return Err(self.unexpected("ANY, EMPTY or element content")),
        }
        self.skip_whitespace()?;
        self.match_token(TokenKind::EndRule)
    }

    fn content_model(&mut self) -> PResult {
        self.consume()?;
        self.skip_whitespace()?;
        if self.expect(TokenKind::Pcdata) {
            return self.mixed_content();
        }
        self.group_body("#PCDATA, name, parameter entity reference, or (")
    }

    /// Everything after `( #PCDATA`
    fn mixed_content(&mut self) -> PResult {
        self.consume()?;
        self.skip_whitespace()?;
        if !self.expect(TokenKind::Pipe) {
            self.match_token(TokenKind::RParen)?;
            if self.expect(TokenKind::Repetition) {
                self.match_star()?;
            }
            return Ok(());
        }
        while self.expect(TokenKind::Pipe) {
            self.consume()?;
            self.skip_whitespace()?;
            self.match_name_or_pe_ref()?;
            self.skip_whitespace()?;
        }
        self.match_token(TokenKind::RParen)?;
        self.match_star()
    }

    fn match_star(&mut self) -> PResult {
        let is_star = matches!(
            &self.lookahead,
            Some(token) if token.kind == TokenKind::Repetition && token.lexeme == "*"
        );
        if is_star {
            self.consume()
        } else {
            Err(self.unexpected("*"))
        }
    }

    /// The particles of a choice or sequence, its `)` and an optional repetition.
    /// The opening `(` and any whitespace after it are already consumed.
    fn group_body(&mut self, first_expected: &str) -> PResult {
        self.content_particle(first_expected)?;
        self.skip_whitespace()?;
        let separator = self
            .peek_kind()
            .filter(|kind| matches!(kind, TokenKind::Comma | TokenKind::Pipe));
        if let Some(separator) = separator {
            while self.expect(separator) {
                self.consume()?;
                self.skip_whitespace()?;
                self.content_particle("( or name")?;
                self.skip_whitespace()?;
            }
        }
        self.match_token(TokenKind::RParen)?;
        self.eat_repetition()
    }

    fn content_particle(&mut self, expected: &str) -> PResult {
        match self.peek_kind() {
            Some(TokenKind::LParen) => {
                self.consume()?;
                self.skip_whitespace()?;
                self.group_body("( or name")
            }
            Some(kind) if kind.is_name_like() => self.match_name_multiple(),
            _ => Err(self.unexpected(expected)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dtd::events::EventLog;
    use crate::dtd::lexing::Lexer;
    use crate::dtd::parsing::Parser;
    use rstest::rstest;

    fn first_error(line: &str) -> (usize, Option<String>) {
        let mut log = EventLog::new();
        let errors = Parser::new(Lexer::new([line], &mut log)).check();
        let message = log.diagnostics().next().map(|d| d.message.clone());
        (errors, message)
    }

    #[rstest]
    #[case("<!ELEMENT br EMPTY>")]
    #[case("<!ELEMENT any ANY >")]
    #[case("<!ELEMENT p (#PCDATA)>")]
    #[case("<!ELEMENT p (#PCDATA)*>")]
    #[case("<!ELEMENT p ( #PCDATA | em | %inline; )*>")]
    #[case("<!ELEMENT list (item+)>")]
    #[case("<!ELEMENT doc (head, body?, (section | appendix)*)+>")]
    #[case("<!ELEMENT x ((a|b),(c,d)?)>")]
    #[case("<!ELEMENT %name; %content;>")]
    #[case("<!ELEMENT ID (NOTATION|SYSTEM)>")]
    #[case("<!ELEMENT x (a,b)?>")]
    fn test_valid_element_declarations(#[case] line: &str) {
        assert_eq!(first_error(line), (0, None));
    }

    #[rstest]
    #[case("<!ELEMENT x (a, b | c)>", "Expecting ), found | at position 18.")]
    #[case("<!ELEMENT x (#PCDATA|a)>", "Expecting *, found > at position 23.")]
    #[case("<!ELEMENT x (#PCDATA|a)+>", "Expecting *, found + at position 23.")]
    #[case("<!ELEMENT x (a,#PCDATA)>", "Expecting ( or name, found #PCDATA at position 15.")]
    #[case("<!ELEMENT x MIXED>", "Expecting ANY, EMPTY or element content, found MIXED at position 12.")]
    #[case("<!ELEMENT x()>", "Expecting whitespace, found ( at position 11.")]
    #[case(
        "<!ELEMENT x (|a)>",
        "Expecting #PCDATA, name, parameter entity reference, or (, found | at position 13."
    )]
    #[case("<!ELEMENT x (a) b>", "Expecting >, found b at position 16.")]
    fn test_invalid_element_declarations(#[case] line: &str, #[case] message: &str) {
        assert_eq!(first_error(line), (1, Some(message.to_string())));
    }

    #[test]
    fn test_spaces_around_separators() {
        let lines = ["<!ELEMENT x ( a ,", "b )>"];
        let errors = Parser::new(Lexer::quiet(lines)).check();
        assert_eq!(errors, 0);
    }
}
