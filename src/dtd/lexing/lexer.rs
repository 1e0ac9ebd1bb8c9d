//! The lexer session
//!
//! Lines are lexed one at a time; a token never spans a line boundary and line terminators
//! are never part of a lexeme. When substitution is on, a `%name;` reference whose name is
//! in the session's table is replaced in the current line by its value and lexing restarts
//! at the same offset, so nested references expand transitively.
//!
//! There is no cycle detection: a self-referential definition keeps rewriting the line
//! forever. This is a known limitation of the grammar subset.

use crate::dtd::error::{CheckError, LexError};
use crate::dtd::events::{Discard, EventSink, LineObservation};
use crate::dtd::lexing::entities::ParameterEntities;
use crate::dtd::lexing::rules::{first_match, COMMENT_RULES, NORMAL_RULES};
use crate::dtd::token::{Token, TokenKind};

/// Which rule table is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Comment,
}

pub struct Lexer<S: EventSink = Discard> {
    lines: Vec<String>,
    /// Index of the current line; `lines.len()` once input is exhausted
    index: usize,
    started: bool,
    /// Current line text, possibly rewritten by substitution
    text: String,
    offset: usize,
    mode: Mode,
    substitute: bool,
    entities: ParameterEntities,
    sink: S,
}

impl Lexer<Discard> {
    /// A lexer that reports nothing, with substitution off; used for plain token listings.
    pub fn quiet<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Lexer::new(lines, Discard).with_substitution(false)
    }
}

impl<S: EventSink> Lexer<S> {
    /// Creates a session over `lines` with a fresh, empty parameter-entity table.
    pub fn new<I, L>(lines: I, sink: S) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Lexer {
            lines: lines.into_iter().map(Into::into).collect(),
            index: 0,
            started: false,
            text: String::new(),
            offset: 0,
            mode: Mode::Normal,
            substitute: true,
            entities: ParameterEntities::new(),
            sink,
        }
    }

    /// Turns parameter-entity substitution on or off (on by default)
    pub fn with_substitution(mut self, substitute: bool) -> Self {
        self.substitute = substitute;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Adds a parameter entity to this session's substitution table.
    pub fn register_parameter_entity(&mut self, name: &str, value: &str) -> Result<(), CheckError> {
        log::trace!("registering parameter entity %{}; = {:?}", name, value);
        self.entities.register(name, value)
    }

    /// Returns the next token, or `None` exactly at end of input.
    ///
    /// On failure the rest of the current line is discarded and comment mode is left, so the
    /// next call resumes on the following line.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            if !self.advance_to_input() {
                return Ok(None);
            }

            let token = self.match_rule()?;

            if self.substitute && token.kind == TokenKind::PeRef {
                if let Some(value) = self.entities.get(token.reference_name()) {
                    let value = value.to_string();
                    log::trace!("substituting {} with {:?}", token.lexeme, value);
                    self.splice(token.lexeme.len(), &value);
                    continue;
                }
            }

            self.offset += token.lexeme.len();
            return Ok(Some(token));
        }
    }

    /// Moves to the next non-exhausted line if needed; false at end of input.
    fn advance_to_input(&mut self) -> bool {
        while !self.started || self.offset >= self.text.len() {
            let next = if self.started { self.index + 1 } else { 0 };
            self.started = true;
            if next >= self.lines.len() {
                self.index = self.lines.len();
                self.text.clear();
                self.offset = 0;
                return false;
            }
            self.index = next;
            self.text = self.lines[next].clone();
            self.offset = 0;
            self.observe_line();
        }
        true
    }

    fn match_rule(&mut self) -> Result<Token, LexError> {
        let rest = &self.text[self.offset..];
        let rules = match self.mode {
            Mode::Normal => &*NORMAL_RULES,
            Mode::Comment => &*COMMENT_RULES,
        };

        match first_match(rules, rest) {
            Some((kind, lexeme)) => {
                match (self.mode, kind) {
                    (Mode::Normal, TokenKind::CommentStart) => self.mode = Mode::Comment,
                    (Mode::Comment, TokenKind::CommentEnd) => self.mode = Mode::Normal,
                    _ => {}
                }
                Ok(Token::new(kind, lexeme, self.index + 1, self.offset))
            }
            None => {
                let err = LexError {
                    line: self.index + 1,
                    column: self.offset,
                    text: rest.to_string(),
                };
                log::debug!("{}", err);
                self.mode = Mode::Normal;
                self.offset = self.text.len();
                Err(err)
            }
        }
    }

    /// Replaces `len` bytes at the current offset with `value`, leaving the offset in place.
    fn splice(&mut self, len: usize, value: &str) {
        let end = self.offset + len;
        let mut text = String::with_capacity(self.text.len() - len + value.len());
        text.push_str(&self.text[..self.offset]);
        text.push_str(value);
        text.push_str(&self.text[end..]);
        self.text = text;
        self.observe_line();
    }

    fn observe_line(&mut self) {
        let was_substituted = self.text != self.lines[self.index];
        self.sink.line(LineObservation {
            line_number: self.index + 1,
            displayed_text: self.text.clone(),
            was_substituted,
        });
    }
}

impl<S: EventSink> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
