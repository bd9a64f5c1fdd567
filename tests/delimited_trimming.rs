//! Trimming behavior of delimited payloads, end to end.

use rstest::rstest;
use stencil_parser::stencil::options::TemplateOptions;
use stencil_parser::stencil::token::{kind, DelimitedToken, Position, SourceToken};

#[rstest]
#[case("-foo-", "foo")]
#[case("-foo", "foo")]
#[case("foo-", "foo")]
#[case("  foo  ", "foo")]
#[case("-", "")]
#[case("--", "")]
#[case("- foo -", "foo")]
#[case("-  user.name  -", "user.name")]
#[case("a-b", "a-b")]
fn test_payloads_are_marker_stripped_then_trimmed(#[case] raw: &str, #[case] expected: &str) {
    let token = DelimitedToken::new(kind::OUTPUT, raw, "x", 0, 1, false, false, None).unwrap();
    assert_eq!(token.content(), expected);
}

#[rstest]
#[case(false, false)]
#[case(true, false)]
#[case(false, true)]
#[case(true, true)]
fn test_trim_flags_match_the_caller_not_the_markers(#[case] left: bool, #[case] right: bool) {
    let token = DelimitedToken::new(kind::TAG, "-body-", "x", 0, 1, left, right, None).unwrap();

    assert_eq!(token.trim_left(), left);
    assert_eq!(token.trim_right(), right);
    assert_eq!(token.content(), "body");
}

#[test]
fn test_whitespace_controlled_output_in_a_multiline_template() {
    let input = "line1\nline2\n  {{-x-}}";
    let begin = input.find("{{").unwrap();
    let options = TemplateOptions::default();

    let token = DelimitedToken::output(input, begin, input.len(), &options, None).unwrap();

    assert_eq!(token.text(), "{{-x-}}");
    assert_eq!(token.len(), 7);
    assert_eq!(token.position(), Position::new(3, 3));
    assert_eq!(token.content(), "x");
}

#[test]
fn test_raw_content_path_matches_the_output_constructor() {
    let input = "line1\nline2\n  {{-x-}}";
    let begin = input.find("{{").unwrap();

    let token = DelimitedToken::new(
        kind::OUTPUT,
        "-x-",
        input,
        begin,
        input.len(),
        false,
        false,
        None,
    )
    .unwrap();

    assert_eq!(token.content(), "x");
    assert_eq!(token.position(), Position::new(3, 3));
}
