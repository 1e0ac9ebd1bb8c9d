//! Parser session: lookahead primitives, top-level dispatch and recovery
//!
//! The parser pulls one token at a time from the lexer and keeps exactly one unconsumed
//! token as lookahead. Declaration handlers (in the sibling modules) only raise errors; the
//! top-level loop in [Parser::check] is the single place where errors are caught, counted,
//! reported and recovered from by skipping to the next `>`.

use crate::dtd::error::CheckError;
use crate::dtd::events::{Diagnostic, Discard, EventSink, Notice, Phase, TraceEvent};
use crate::dtd::lexing::Lexer;
use crate::dtd::token::{Location, Token, TokenKind};

pub type PResult<T = ()> = Result<T, CheckError>;

pub struct Parser<S: EventSink = Discard> {
    pub(super) lexer: Lexer<S>,
    pub(super) lookahead: Option<Token>,
    /// Position just past the last consumed token
    end: Location,
    errors: usize,
    verbose: bool,
}

impl<S: EventSink> Parser<S> {
    /// Wraps a lexer session. The lookahead is primed by [Parser::check], inside the
    /// recovery boundary, so a lexical failure on the very first token is reported too.
    pub fn new(lexer: Lexer<S>) -> Self {
        Parser {
            lexer,
            lookahead: None,
            end: Location::new(1, 0),
            errors: 0,
            verbose: false,
        }
    }

    /// Emit a trace event for every consumed token
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn into_sink(self) -> S {
        self.lexer.into_sink()
    }

    /// Checks the whole input and returns the number of errors found.
    ///
    /// intSubset ::= (markupdecl | DeclSep)*
    /// DeclSep   ::= PEReference | S
    pub fn check(&mut self) -> usize {
        let mut outcome = self.consume();
        loop {
            if let Err(err) = outcome {
                self.report(&err, Phase::Declaration);
                if let Err(err) = self.recover() {
                    self.report(&err, Phase::Recovery);
                    break;
                }
            }
            if self.at_eof() {
                break;
            }
            outcome = self.declaration();
        }
        self.errors
    }

    fn declaration(&mut self) -> PResult {
        match self.peek_kind() {
            Some(TokenKind::ElementDecl) => self.element_decl(),
            Some(TokenKind::AttlistDecl) => self.attlist_decl(),
            Some(TokenKind::EntityDecl) => self.entity_decl(),
            Some(TokenKind::NotationDecl) => self.skip_declaration(TokenKind::EndRule),
            Some(TokenKind::PiStart) => self.skip_declaration(TokenKind::PiEnd),
            Some(TokenKind::CommentStart) => self.comment(),
            Some(TokenKind::PeRef) | Some(TokenKind::Whitespace) => self.consume(),
            _ => Err(self.unexpected("start of a rule")),
        }
    }

    fn report(&mut self, err: &CheckError, phase: Phase) {
        self.errors += 1;
        let at = self.position();
        log::debug!("{} at {} ({:?})", err, at, phase);
        self.lexer.sink_mut().diagnostic(Diagnostic {
            kind: err.kind(),
            message: err.to_string(),
            line: at.line,
            column: at.column,
            phase,
        });
    }

    /// Skips to just past the next `>`, starting with the current token.
    ///
    /// Nothing is left to skip at end of input, so that is not a failure.
    fn recover(&mut self) -> PResult {
        let Some(start) = self.lookahead.as_ref().map(Token::location) else {
            return Ok(());
        };
        log::debug!("skipping to end of rule from {}", start);
        self.skip_past(TokenKind::EndRule, start)
    }

    /// Where the parser currently is: the lookahead, or the end of the last token at EOF
    pub(super) fn position(&self) -> Location {
        self.lookahead
            .as_ref()
            .map(Token::location)
            .unwrap_or(self.end)
    }

    pub(super) fn notice(&mut self, message: String) {
        let at = self.position();
        log::debug!("{}", message);
        self.lexer.sink_mut().notice(Notice {
            message,
            line: at.line,
            column: at.column,
        });
    }

    /// Moves ahead one token.
    ///
    /// If the lexer fails, the unmatched text becomes an UNKNOWN lookahead so that the error
    /// is located and recovery has something to skip.
    pub(super) fn consume(&mut self) -> PResult {
        if let Some(token) = self.lookahead.take() {
            self.end = token.end();
            if self.verbose {
                self.lexer.sink_mut().trace(TraceEvent { token });
            }
        }
        match self.lexer.next_token() {
            Ok(next) => {
                self.lookahead = next;
                Ok(())
            }
            Err(err) => {
                self.lookahead = Some(Token::new(
                    TokenKind::Unknown,
                    err.text.clone(),
                    err.line,
                    err.column,
                ));
                Err(err.into())
            }
        }
    }

    pub(super) fn peek_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    pub(super) fn at_eof(&self) -> bool {
        self.lookahead.is_none()
    }

    /// True if the lookahead is of `kind`; false at end of input
    pub(super) fn expect(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// The error for finding something other than `expected` here
    pub(super) fn unexpected(&self, expected: &str) -> CheckError {
        match &self.lookahead {
            Some(token) => CheckError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.clone(),
            },
            None => CheckError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }

    /// A copy of the lookahead, or UnexpectedEof
    pub(super) fn current(&self, expected: &str) -> PResult<Token> {
        self.lookahead
            .clone()
            .ok_or_else(|| CheckError::UnexpectedEof {
                expected: expected.to_string(),
            })
    }

    pub(super) fn match_token(&mut self, kind: TokenKind) -> PResult {
        if self.expect(kind) {
            self.consume()
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Consumes zero or more tokens of `kind`
    pub(super) fn match_any(&mut self, kind: TokenKind) -> PResult {
        while self.expect(kind) {
            self.consume()?;
        }
        Ok(())
    }

    pub(super) fn match_at_least_one(&mut self, kind: TokenKind) -> PResult {
        if !self.expect(kind) {
            return Err(self.unexpected(kind.describe()));
        }
        self.match_any(kind)
    }

    /// S?
    pub(super) fn skip_whitespace(&mut self) -> PResult {
        self.match_any(TokenKind::Whitespace)
    }

    /// S
    ///
    /// Line terminators are never lexed, so a lookahead that starts a later line than the
    /// last consumed token counts as whitespace.
    pub(super) fn require_whitespace(&mut self) -> PResult {
        if self.at_line_break() {
            return self.skip_whitespace();
        }
        self.match_at_least_one(TokenKind::Whitespace)
    }

    fn at_line_break(&self) -> bool {
        self.lookahead
            .as_ref()
            .is_some_and(|token| token.line > self.end.line)
    }

    /// Accepts a Name, a keyword used as a name, or a parameter-entity reference that
    /// could not be substituted. The error only ever says a name was expected.
    pub(super) fn match_name_or_pe_ref(&mut self) -> PResult<Token> {
        let token = self.current(TokenKind::Name.describe())?;
        if !token.kind.is_name_like() {
            return Err(self.unexpected(TokenKind::Name.describe()));
        }
        self.consume()?;
        Ok(token)
    }

    /// A name directly followed by an optional `*`, `+` or `?`
    pub(super) fn match_name_multiple(&mut self) -> PResult {
        self.match_name_or_pe_ref()?;
        self.eat_repetition()
    }

    /// Consumes a repetition operator if one is next.
    ///
    /// The lexer prefers `?>` over `?`, so `(a|b)?>` arrives as a single `?>`. Here that
    /// token is split: the `?` is consumed and a `>` one column to the right becomes the
    /// lookahead.
    pub(super) fn eat_repetition(&mut self) -> PResult {
        match self.peek_kind() {
            Some(TokenKind::Repetition) => self.consume(),
            Some(TokenKind::PiEnd) => {
                if let Some(token) = self.lookahead.take() {
                    let question = Token::new(TokenKind::Repetition, "?", token.line, token.column);
                    let close = Token::new(TokenKind::EndRule, ">", token.line, token.column + 1);
                    self.end = question.end();
                    if self.verbose {
                        self.lexer.sink_mut().trace(TraceEvent { token: question });
                    }
                    self.lookahead = Some(close);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Consumes up to and including the next token of kind `end`.
    ///
    /// `start` locates the construct being skipped, for the error raised at end of input.
    pub(super) fn skip_past(&mut self, end: TokenKind, start: Location) -> PResult {
        loop {
            match self.peek_kind() {
                Some(kind) if kind == end => return self.consume(),
                Some(_) => self.consume()?,
                None => return Err(CheckError::UnterminatedRule { start }),
            }
        }
    }
}
