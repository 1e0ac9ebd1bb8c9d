//! Observer interface between the checker and whatever displays its progress.
//!
//!     The lexer reports every line it starts on (and every rewrite of that line caused by
//!     parameter-entity substitution); the parser reports diagnostics, skipped-body notices and,
//!     when verbose, every token it consumes. None of this is rendered here: an [EventSink]
//!     decides what to keep. [Discard] keeps nothing, [EventLog] keeps everything in order.

use crate::dtd::error::ErrorKind;
use crate::dtd::token::Token;
use serde::{Deserialize, Serialize};

/// The lexer started processing a line, or rewrote it through substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineObservation {
    pub line_number: usize,
    pub displayed_text: String,
    pub was_substituted: bool,
}

/// Whether a failure was recovered from or hit while recovering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// A declaration failed; the parser skipped to the end of the rule
    Declaration,
    /// Skipping to the end of the rule failed too; checking stopped
    Recovery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub phase: Phase,
}

/// A token consumed by the parser (verbose mode only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub token: Token,
}

/// Informational message, e.g. a declaration body that is skipped without parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Line(LineObservation),
    Diagnostic(Diagnostic),
    Trace(TraceEvent),
    Notice(Notice),
}

/// Receives checker events as they happen.
///
/// All methods default to doing nothing, so a sink only implements what it cares about.
pub trait EventSink {
    fn line(&mut self, _event: LineObservation) {}
    fn diagnostic(&mut self, _event: Diagnostic) {}
    fn trace(&mut self, _event: TraceEvent) {}
    fn notice(&mut self, _event: Notice) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn line(&mut self, event: LineObservation) {
        (**self).line(event)
    }

    fn diagnostic(&mut self, event: Diagnostic) {
        (**self).diagnostic(event)
    }

    fn trace(&mut self, event: TraceEvent) {
        (**self).trace(event)
    }

    fn notice(&mut self, event: Notice) {
        (**self).notice(event)
    }
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl EventSink for Discard {}

/// Sink that buffers every event in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter().filter_map(|event| match event {
            Event::Diagnostic(diagnostic) => Some(diagnostic),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineObservation> {
        self.events.iter().filter_map(|event| match event {
            Event::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl EventSink for EventLog {
    fn line(&mut self, event: LineObservation) {
        self.events.push(Event::Line(event));
    }

    fn diagnostic(&mut self, event: Diagnostic) {
        self.events.push(Event::Diagnostic(event));
    }

    fn trace(&mut self, event: TraceEvent) {
        self.events.push(Event::Trace(event));
    }

    fn notice(&mut self, event: Notice) {
        self.events.push(Event::Notice(event));
    }
}
