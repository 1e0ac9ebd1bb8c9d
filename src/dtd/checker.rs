//! Session-level entry points
//!
//! A check session owns one lexer (and with it one parameter-entity table) and one parser,
//! runs them over the input once and yields the error count. Nothing is shared between
//! sessions, so independent checks may run concurrently.

use crate::dtd::config::CheckOptions;
use crate::dtd::error::LexError;
use crate::dtd::events::{Diagnostic, Event, EventLog, EventSink};
use crate::dtd::lexing::Lexer;
use crate::dtd::parsing::Parser;
use crate::dtd::token::Token;
use serde::{Deserialize, Serialize};

/// Splits source text into lines, without their `\n` or `\r\n` terminators
pub fn source_lines(source: &str) -> Vec<String> {
    source.lines().map(str::to_string).collect()
}

/// Lexes `source` without parsing it and without parameter-entity substitution.
///
/// A lex error does not stop the listing; lexing resumes on the next line.
pub fn tokens(source: &str) -> Vec<Result<Token, LexError>> {
    Lexer::quiet(source_lines(source)).collect()
}

/// Checks `lines`, streaming every event into `sink`, and returns the error count.
pub fn check_lines<I, L, S>(lines: I, options: &CheckOptions, sink: S) -> usize
where
    I: IntoIterator<Item = L>,
    L: Into<String>,
    S: EventSink,
{
    let lexer = Lexer::new(lines, sink).with_substitution(options.substitute_parameter_entities);
    let mut parser = Parser::new(lexer).with_verbose(options.verbose);
    let errors = parser.check();
    log::debug!("check finished with {} error(s)", errors);
    errors
}

/// The buffered outcome of a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub error_count: usize,
    pub line_count: usize,
    pub events: Vec<Event>,
}

impl Report {
    pub fn is_well_formed(&self) -> bool {
        self.error_count == 0
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter().filter_map(|event| match event {
            Event::Diagnostic(diagnostic) => Some(diagnostic),
            _ => None,
        })
    }
}

/// Checks `source` and collects every event into a [Report].
pub fn check(source: &str, options: &CheckOptions) -> Report {
    let lines = source_lines(source);
    let line_count = lines.len();
    let mut log = EventLog::new();
    let error_count = check_lines(lines, options, &mut log);
    Report {
        error_count,
        line_count,
        events: log.into_events(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtd::token::TokenKind;

    #[test]
    fn test_source_lines_strips_terminators() {
        assert_eq!(
            source_lines("a\r\nb\n\nc"),
            vec!["a".to_string(), "b".to_string(), String::new(), "c".to_string()]
        );
        assert!(source_lines("").is_empty());
    }

    #[test]
    fn test_tokens_do_not_substitute() {
        let listed = tokens("<!ENTITY % e \"ANY\">\n%e;");
        let last = listed.last().unwrap().as_ref().unwrap();
        assert_eq!(last.kind, TokenKind::PeRef);
        assert_eq!(last.lexeme, "%e;");
    }

    #[test]
    fn test_tokens_continue_after_lex_error() {
        let listed = tokens("<!-- a -- b -->\n<!ELEMENT");
        assert!(listed.iter().any(Result::is_err));
        assert_eq!(
            listed.last().unwrap().as_ref().unwrap().kind,
            TokenKind::ElementDecl
        );
    }

    #[test]
    fn test_report_counts() {
        let report = check("<!ELEMENT a EMPTY>\n<!ELEMENT b>\n", &CheckOptions::default());
        assert_eq!(report.error_count, 1);
        assert_eq!(report.line_count, 2);
        assert!(!report.is_well_formed());
        assert_eq!(report.diagnostics().count(), 1);
    }

    #[test]
    fn test_substitution_can_be_disabled() {
        let source = "<!ENTITY % e \"oops\">\n<!ELEMENT a %e;>";
        let on = check(source, &CheckOptions::default());
        let off = check(
            source,
            &CheckOptions {
                substitute_parameter_entities: false,
                ..CheckOptions::default()
            },
        );
        assert_eq!(on.error_count, 1);
        assert_eq!(off.error_count, 0);
    }

    #[test]
    fn test_sessions_are_independent() {
        let options = CheckOptions::default();
        check("<!ENTITY % e \"oops\">", &options);
        let report = check("<!ELEMENT a %e;>", &options);
        assert!(report.is_well_formed());
    }
}
