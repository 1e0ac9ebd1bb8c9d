//! Plain-text rendering
//!
//! A report renders as the source, one numbered line per observed line, with each
//! diagnostic directly under the line it refers to:
//!
//!     1: <!ELEMENT a (b,>
//!                       ^
//!     Expecting ( or name, found > at position 15. Skipping to end of rule.
//!     1 error(s) found.

use crate::dtd::checker::Report;
use crate::dtd::error::LexError;
use crate::dtd::events::{Event, Phase};
use crate::dtd::token::Token;

pub const SUBSTITUTION_BANNER: &str =
    "This line has been modified by a parameter entity reference and is now:";

pub fn render_report(report: &Report) -> String {
    let width = report.line_count.max(1).to_string().len();
    let mut out = String::new();
    for event in &report.events {
        match event {
            Event::Line(line) => {
                if line.was_substituted {
                    out.push_str(SUBSTITUTION_BANNER);
                    out.push('\n');
                }
                out.push_str(&format!(
                    "{:>width$}: {}\n",
                    line.line_number,
                    line.displayed_text,
                    width = width
                ));
            }
            Event::Diagnostic(diagnostic) => {
                out.push_str(&" ".repeat(width + 2 + diagnostic.column));
                out.push_str("^\n");
                out.push_str(&diagnostic.message);
                if diagnostic.phase == Phase::Declaration {
                    out.push_str(" Skipping to end of rule.");
                }
                out.push('\n');
            }
            Event::Notice(notice) => {
                out.push_str(&notice.message);
                out.push('\n');
            }
            Event::Trace(trace) => {
                out.push_str(&trace.token.to_string());
                out.push('\n');
            }
        }
    }
    out.push_str(&summary(report.error_count));
    out.push('\n');
    out
}

pub fn summary(error_count: usize) -> String {
    if error_count == 0 {
        "No errors found.".to_string()
    } else {
        format!("{} error(s) found.", error_count)
    }
}

pub fn render_tokens(tokens: &[Result<Token, LexError>]) -> String {
    tokens
        .iter()
        .map(|entry| match entry {
            Ok(token) => format!("{}\n", token),
            Err(err) => format!("error: {}\n", err),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtd::checker::{check, tokens};
    use crate::dtd::config::CheckOptions;

    #[test]
    fn test_error_caret_under_offending_token() {
        let report = check("<!ELEMENT a (b,>", &CheckOptions::default());
        let expected = [
            "1: <!ELEMENT a (b,>",
            "                  ^",
            "Expecting ( or name, found > at position 15. Skipping to end of rule.",
            "1 error(s) found.",
            "",
        ]
        .join("\n");
        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn test_line_numbers_are_right_aligned() {
        let source = (0..10).map(|_| "<!ELEMENT a EMPTY>").collect::<Vec<_>>().join("\n");
        let rendered = render_report(&check(&source, &CheckOptions::default()));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " 1: <!ELEMENT a EMPTY>");
        assert_eq!(lines[9], "10: <!ELEMENT a EMPTY>");
        assert_eq!(lines[10], "No errors found.");
    }

    #[test]
    fn test_substituted_line_is_announced() {
        let report = check(
            "<!ENTITY % e \"EMPTY\">\n<!ELEMENT a %e;>",
            &CheckOptions::default(),
        );
        let rendered = render_report(&report);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1: <!ENTITY % e \"EMPTY\">",
                "2: <!ELEMENT a %e;>",
                SUBSTITUTION_BANNER,
                "2: <!ELEMENT a EMPTY>",
                "No errors found.",
            ]
        );
    }

    #[test]
    fn test_failed_recovery_has_no_skip_suffix() {
        let rendered = render_report(&check("<!ELEMENT", &CheckOptions::default()));
        assert!(rendered.contains("Expecting whitespace : Unexpected EOF Skipping to end of rule.\n"));
        assert!(!rendered.contains("not closed. Skipping"));
    }

    #[test]
    fn test_token_listing() {
        let rendered = render_tokens(&tokens("<!ELEMENT x"));
        insta::assert_snapshot!(rendered.lines().last().unwrap(), @"[ name: x (1,10) ]");
    }

    #[test]
    fn test_token_listing_shows_lex_errors() {
        let rendered = render_tokens(&tokens("<!-- -- -->"));
        insta::assert_snapshot!(
            rendered.lines().last().unwrap(),
            @"error: Unable to lex line 1 at position 5 [ -- --> ]"
        );
    }
}
