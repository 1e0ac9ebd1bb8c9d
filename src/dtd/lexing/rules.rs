//! Ordered lexical rule tables
//!
//! Each table is a list of (pattern, kind) rules tried in declaration order against the
//! rest of the current line; the first rule matching a prefix wins. Order matters: exact
//! keywords precede the looser NAME/NMTOKEN rules that would otherwise swallow them, and the
//! UNKNOWN catch-alls come last so that normal mode always produces a token.
//!
//! Keyword rules only match when the keyword is not immediately followed by another name
//! character, so `ANYTHING` lexes as one NAME rather than `ANY` + `THING`.

use crate::dtd::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters allowed after the first character of a Name
const NAME_CHAR: &str = r"[A-Za-z0-9._:\-]";

/// A single lexical rule
#[derive(Debug)]
pub struct Rule {
    pub kind: TokenKind,
    regex: Regex,
}

impl Rule {
    fn pattern(kind: TokenKind, pattern: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(&format!("^({})", pattern)).unwrap(),
        }
    }

    fn literal(kind: TokenKind, text: &str) -> Self {
        Self::pattern(kind, &regex::escape(text))
    }

    fn keyword(kind: TokenKind, pattern: &str) -> Self {
        let not_name_char = NAME_CHAR.replacen('[', "[^", 1);
        Self {
            kind,
            regex: Regex::new(&format!("^({})(?:{}|$)", pattern, not_name_char)).unwrap(),
        }
    }

    /// Returns the lexeme if this rule matches a prefix of `text`
    pub fn match_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}

/// Rules outside comments
pub static NORMAL_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::literal(TokenKind::CommentStart, "<!--"),
        // kept so a stray closer gets a precise error instead of UNKNOWN
        Rule::literal(TokenKind::CommentEnd, "-->"),
        Rule::literal(TokenKind::EndRule, ">"),
        Rule::keyword(TokenKind::ElementDecl, "<!ELEMENT"),
        Rule::keyword(TokenKind::AttlistDecl, "<!ATTLIST"),
        Rule::keyword(TokenKind::EntityDecl, "<!ENTITY"),
        Rule::keyword(TokenKind::NotationDecl, "<!NOTATION"),
        Rule::literal(TokenKind::PiStart, "<?"),
        Rule::literal(TokenKind::PiEnd, "?>"),
        Rule::keyword(TokenKind::Any, "ANY"),
        Rule::keyword(TokenKind::Cdata, "CDATA"),
        Rule::keyword(TokenKind::Empty, "EMPTY"),
        Rule::keyword(TokenKind::Entities, "ENTIT(?:IES|Y)"),
        Rule::keyword(TokenKind::Idrefs, "IDREFS?"),
        Rule::keyword(TokenKind::Id, "ID"),
        Rule::keyword(TokenKind::Ndata, "NDATA"),
        Rule::keyword(TokenKind::Nmtokens, "NMTOKENS?"),
        Rule::keyword(TokenKind::Notation, "NOTATION"),
        Rule::keyword(TokenKind::Public, "PUBLIC"),
        Rule::keyword(TokenKind::System, "SYSTEM"),
        Rule::keyword(TokenKind::Implied, "#IMPLIED"),
        Rule::keyword(TokenKind::Required, "#REQUIRED"),
        Rule::keyword(TokenKind::Fixed, "#FIXED"),
        Rule::keyword(TokenKind::Pcdata, "#PCDATA"),
        Rule::pattern(TokenKind::Whitespace, r"[ \t\r\n]+"),
        Rule::literal(TokenKind::LParen, "("),
        Rule::literal(TokenKind::RParen, ")"),
        Rule::literal(TokenKind::Comma, ","),
        Rule::literal(TokenKind::Pipe, "|"),
        Rule::pattern(TokenKind::Repetition, r"[*+?]"),
        Rule::pattern(TokenKind::Name, &format!("[A-Za-z_:]{}*", NAME_CHAR)),
        Rule::pattern(TokenKind::Nmtoken, &format!("{}+", NAME_CHAR)),
        Rule::pattern(TokenKind::PeRef, &format!("%[A-Za-z_:]{}*;", NAME_CHAR)),
        Rule::pattern(TokenKind::Literal, r#""[^"]*""#),
        Rule::pattern(TokenKind::Literal, r"'[^']*'"),
        Rule::literal(TokenKind::Percent, "%"),
        // so it won't swallow PI pseudo-attributes
        Rule::literal(TokenKind::Unknown, "="),
        Rule::pattern(TokenKind::Unknown, r"[^ \t\r\n<>]+"),
        Rule::literal(TokenKind::Unknown, "<"),
    ]
});

/// Rules inside `<!-- ... -->`
pub static COMMENT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::literal(TokenKind::CommentEnd, "-->"),
        Rule::pattern(TokenKind::CommentText, "[^-]+"),
        Rule::pattern(TokenKind::CommentText, "-[^-]"),
        Rule::pattern(TokenKind::CommentText, "-$"),
    ]
});

/// First rule in `rules` matching a prefix of `text`
pub fn first_match<'t>(rules: &[Rule], text: &'t str) -> Option<(TokenKind, &'t str)> {
    rules
        .iter()
        .find_map(|rule| rule.match_prefix(text).map(|lexeme| (rule.kind, lexeme)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn normal(text: &str) -> Option<(TokenKind, &str)> {
        first_match(&NORMAL_RULES, text)
    }

    #[rstest]
    #[case("<!ELEMENT foo", TokenKind::ElementDecl, "<!ELEMENT")]
    #[case("<!-- note", TokenKind::CommentStart, "<!--")]
    #[case("?> rest", TokenKind::PiEnd, "?>")]
    #[case("? rest", TokenKind::Repetition, "?")]
    #[case("ANY>", TokenKind::Any, "ANY")]
    #[case("ANYTHING", TokenKind::Name, "ANYTHING")]
    #[case("IDREFS ", TokenKind::Idrefs, "IDREFS")]
    #[case("IDREF)", TokenKind::Idrefs, "IDREF")]
    #[case("ID ", TokenKind::Id, "ID")]
    #[case("IDENT", TokenKind::Name, "IDENT")]
    #[case("ENTITIES", TokenKind::Entities, "ENTITIES")]
    #[case("ENTITY", TokenKind::Entities, "ENTITY")]
    #[case("#PCDATA|a", TokenKind::Pcdata, "#PCDATA")]
    #[case("x-1.y:z,", TokenKind::Name, "x-1.y:z")]
    #[case("12abc|", TokenKind::Nmtoken, "12abc")]
    #[case("%ent; x", TokenKind::PeRef, "%ent;")]
    #[case("% ent", TokenKind::Percent, "%")]
    #[case("\"a 'b'\" x", TokenKind::Literal, "\"a 'b'\"")]
    #[case("'a \"b\"'", TokenKind::Literal, "'a \"b\"'")]
    #[case("=\"1.0\"", TokenKind::Unknown, "=")]
    #[case("@foo>", TokenKind::Unknown, "@foo")]
    #[case("<x", TokenKind::Unknown, "<")]
    #[case(" \t x", TokenKind::Whitespace, " \t ")]
    fn test_normal_rule_priority(
        #[case] text: &str,
        #[case] kind: TokenKind,
        #[case] lexeme: &str,
    ) {
        assert_eq!(normal(text), Some((kind, lexeme)));
    }

    #[rstest]
    #[case(" text -", TokenKind::CommentText, " text ")]
    #[case("-x", TokenKind::CommentText, "-x")]
    #[case("-", TokenKind::CommentText, "-")]
    #[case("--> after", TokenKind::CommentEnd, "-->")]
    fn test_comment_rules(#[case] text: &str, #[case] kind: TokenKind, #[case] lexeme: &str) {
        assert_eq!(first_match(&COMMENT_RULES, text), Some((kind, lexeme)));
    }

    #[test]
    fn test_double_dash_inside_comment_has_no_rule() {
        assert_eq!(first_match(&COMMENT_RULES, "-- x"), None);
    }

    #[test]
    fn test_unterminated_literal_falls_through() {
        assert_eq!(normal("\"open"), Some((TokenKind::Unknown, "\"open")));
    }
}
