//! JSON rendering
//!
//! Reports serialize as-is. Token listings become an array of `{"token": ...}` and
//! `{"error": ...}` entries, in lexing order.

use super::FormatError;
use crate::dtd::checker::Report;
use crate::dtd::error::LexError;
use crate::dtd::token::Token;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Listed<'a> {
    Token(&'a Token),
    Error {
        line: usize,
        column: usize,
        text: &'a str,
        message: String,
    },
}

impl<'a> From<&'a Result<Token, LexError>> for Listed<'a> {
    fn from(entry: &'a Result<Token, LexError>) -> Self {
        match entry {
            Ok(token) => Listed::Token(token),
            Err(err) => Listed::Error {
                line: err.line,
                column: err.column,
                text: &err.text,
                message: err.to_string(),
            },
        }
    }
}

pub fn render_report(report: &Report) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

pub fn render_tokens(tokens: &[Result<Token, LexError>]) -> Result<String, FormatError> {
    let listed: Vec<Listed> = tokens.iter().map(Listed::from).collect();
    serde_json::to_string_pretty(&listed)
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtd::checker::{check, tokens};
    use crate::dtd::config::CheckOptions;
    use serde_json::{json, Value};

    #[test]
    fn test_report_shape() {
        let report = check("<!ELEMENT a>", &CheckOptions::default());
        let value: Value = serde_json::from_str(&render_report(&report).unwrap()).unwrap();
        assert_eq!(value["error_count"], 1);
        assert_eq!(value["line_count"], 1);
        assert_eq!(
            value["events"][0],
            json!({
                "event": "line",
                "line_number": 1,
                "displayed_text": "<!ELEMENT a>",
                "was_substituted": false
            })
        );
        assert_eq!(value["events"][1]["event"], "diagnostic");
        assert_eq!(value["events"][1]["kind"], "unexpected_token");
        assert_eq!(value["events"][1]["phase"], "declaration");
        assert_eq!(value["events"][1]["column"], 11);
    }

    #[test]
    fn test_report_deserializes_back() {
        let report = check("<!ELEMENT a (b|c)*>", &CheckOptions::default());
        let restored: Report = serde_json::from_str(&render_report(&report).unwrap()).unwrap();
        assert_eq!(restored, report);
    }

    #[test]
    fn test_token_listing_entries() {
        let value: Value =
            serde_json::from_str(&render_tokens(&tokens("<!-- -- -->\n>")).unwrap()).unwrap();
        assert_eq!(
            value[0],
            json!({"token": {"kind": "COMMENT_START", "lexeme": "<!--", "line": 1, "column": 0}})
        );
        assert_eq!(value[2]["error"]["column"], 5);
        assert_eq!(value[2]["error"]["text"], "-- -->");
        assert_eq!(value[3]["token"]["kind"], "END_RULE");
    }
}
