//! Error reporting for malformed lines and inputs.

use super::{ParseErrorKind, parse, parse_content_line, parse_single};

#[test]
fn missing_colon_reports_line_number() {
    let err = parse_content_line("FN John Doe", 7).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
    assert_eq!(err.line, 7);
    assert_eq!(err.to_string(), "line 7: missing separator: missing colon separator");
}

#[test]
fn colon_only_inside_quotes_is_missing() {
    let err = parse_content_line("X-FOO;PARAM=\"a:b\"", 2).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
}

#[test]
fn empty_identifier_is_rejected() {
    let err = parse_content_line(":value", 3).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);

    let err = parse_content_line(";TYPE=HOME:value", 4).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidPropertyName);
}

#[test]
fn empty_input_yields_no_cards() {
    assert!(parse("").is_empty());
    assert!(parse("\r\n\r\n").is_empty());
    assert!(parse("END:VCARD\r\n").is_empty());
}

#[test]
fn parse_single_reports_no_card() {
    let err = parse_single("BEGIN:VCARD\r\nFN:never closed\r\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NoCard);
}

#[test_log::test]
fn malformed_lines_do_not_abort_the_card() {
    let input = "BEGIN:VCARD\r\n\
                 VERSION:3.0\r\n\
                 garbage\r\n\
                 :no name\r\n\
                 FN:Still Here\r\n\
                 END:VCARD\r\n";
    let cards = parse(input);
    assert_eq!(cards.len(), 1);
    assert_eq!(
        cards[0].first("FN").and_then(|l| l.value.as_text()),
        Some("Still Here")
    );
}
