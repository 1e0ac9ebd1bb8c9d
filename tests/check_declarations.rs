//! Declaration-level checks through the public entry point

use dtdcheck::dtd::{check, CheckOptions, ErrorKind};
use rstest::rstest;

fn error_count(source: &str) -> usize {
    check(source, &CheckOptions::default()).error_count
}

fn kinds(source: &str) -> Vec<ErrorKind> {
    check(source, &CheckOptions::default())
        .diagnostics()
        .map(|diagnostic| diagnostic.kind)
        .collect()
}

#[rstest]
#[case::element_sequence("<!ELEMENT foo (bar, baz*)>")]
#[case::required_id("<!ATTLIST foo id ID #REQUIRED>")]
#[case::parameter_entity("<!ENTITY % x \"text\">")]
#[case::enumeration("<!ATTLIST a b (x|y|z) #IMPLIED>")]
#[case::nested_groups("<!ELEMENT a ((b|c)+, (d, e?)*)>")]
#[case::mixed("<!ELEMENT p (#PCDATA|a|b)*>")]
#[case::empty_input("")]
#[case::only_whitespace("   \n\t\n")]
#[case::comment_then_rule("<!-- note --><!ELEMENT a EMPTY>")]
#[case::several_rules_per_line("<!ELEMENT a EMPTY><!ELEMENT b ANY> <!ATTLIST a x CDATA #IMPLIED>")]
#[case::crlf_lines("<!ELEMENT a EMPTY>\r\n<!ELEMENT b ANY>\r\n")]
#[case::pe_ref_as_separator("<!ENTITY % decls \"<!ELEMENT z EMPTY>\">\n%decls;")]
#[case::content_spec_on_next_line("<!ELEMENT a\n(b)>")]
#[case::name_on_next_line("<!ELEMENT\na EMPTY>")]
#[case::entity_value_on_next_line("<!ENTITY % x\n\"v\">")]
#[case::default_on_next_line("<!ATTLIST a b CDATA\n#IMPLIED>")]
#[case::one_token_per_line("<!ATTLIST\na\nb\nCDATA\n#FIXED\n\"1\"\n>")]
fn test_well_formed(#[case] source: &str) {
    assert_eq!(error_count(source), 0, "{source}");
}

#[rstest]
#[case::missing_content_spec("<!ELEMENT a>", vec![ErrorKind::UnexpectedToken])]
#[case::unterminated("<!ELEMENT a EMPTY", vec![ErrorKind::UnexpectedEof])]
#[case::mixed_plus("<!ELEMENT p (#PCDATA|a)+>", vec![ErrorKind::UnexpectedToken])]
#[case::pcdata_not_first("<!ELEMENT p (a|#PCDATA)*>", vec![ErrorKind::UnexpectedToken])]
#[case::mixed_separators("<!ELEMENT p (a,b|c)>", vec![ErrorKind::UnexpectedToken])]
#[case::quote_in_entity("<!ENTITY % x \"has \"\" quote\">", vec![ErrorKind::InvalidEntityValue])]
#[case::stray_closer("--> <!ELEMENT a EMPTY>", vec![ErrorKind::UnexpectedToken])]
#[case::unclosed_comment("<!-- forever", vec![ErrorKind::UnterminatedComment])]
#[case::double_dash("<!-- a -- b -->\n<!ELEMENT a EMPTY>", vec![ErrorKind::Lex])]
#[case::double_dash_at_end("<!-- a -- b -->", vec![ErrorKind::Lex, ErrorKind::UnterminatedRule])]
#[case::stray_at_end("@", vec![ErrorKind::UnexpectedToken, ErrorKind::UnterminatedRule])]
#[case::missing_space_before_group("<!ELEMENT a(b)>", vec![ErrorKind::UnexpectedToken])]
#[case::missing_default_after_break("<!ATTLIST a b CDATA\n>", vec![ErrorKind::UnexpectedToken])]
fn test_ill_formed(#[case] source: &str, #[case] expected: Vec<ErrorKind>) {
    assert_eq!(kinds(source), expected, "{source}");
}

#[test]
fn test_keyword_prefix_is_a_name() {
    assert_eq!(error_count("<!ELEMENT ANYTHING EMPTY>"), 0);
    assert_eq!(error_count("<!ELEMENT IDENTITY (EMPTYISH)>"), 0);
}

#[test]
fn test_entity_defined_after_use_is_not_substituted() {
    let source = "<!ELEMENT a %late;>\n<!ENTITY % late \"bogus\">";
    assert_eq!(error_count(source), 0);
}

#[test]
fn test_redefinition_takes_latest_value() {
    let source = [
        "<!ENTITY % m \"EMPTY\">",
        "<!ENTITY % m \"nonsense\">",
        "<!ELEMENT a %m;>",
    ]
    .join("\n");
    assert_eq!(kinds(&source), vec![ErrorKind::UnexpectedToken]);
}
