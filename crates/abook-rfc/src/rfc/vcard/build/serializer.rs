//! vCard serializer.

use std::fmt::Write;

use super::fold::{fold_line, fold_quoted_printable};
use crate::rfc::vcard::codec::{
    encode_base64, encode_quoted_printable, format_class, format_date_time, format_geo,
    format_utc_offset, join_escaped,
};
use crate::rfc::vcard::core::{VCard, VCardLine, VCardParameter, VCardValue, VCardVersion, names};

/// Output tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Fold lines longer than 75 octets.
    pub fold: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { fold: true }
    }
}

/// Serializes cards with default options.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    serialize_with(cards, SerializeOptions::default())
}

/// Serializes a single card with default options.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    serialize(std::slice::from_ref(card))
}

/// Serializes cards back to back.
///
/// Each card is framed by `BEGIN:VCARD`, `VERSION:<version>` and `END:VCARD`;
/// stored `VERSION` lines are not repeated. Lines are CRLF terminated.
#[must_use]
#[tracing::instrument(skip(cards), fields(count = cards.len()))]
pub fn serialize_with(cards: &[VCard], options: SerializeOptions) -> String {
    tracing::debug!("Serializing vCards");

    let mut output = String::new();
    for card in cards {
        write_card(&mut output, card, options);
    }
    output
}

fn write_card(out: &mut String, card: &VCard, options: SerializeOptions) {
    out.push_str("BEGIN:VCARD\r\n");
    write!(out, "VERSION:{}\r\n", card.version).ok();

    for line in card.all_lines() {
        if line.identifier.eq_ignore_ascii_case("VERSION") {
            continue;
        }
        if let Some(text) = serialize_line(line, card.version, options) {
            out.push_str(&text);
            out.push_str("\r\n");
        }
    }

    out.push_str("END:VCARD\r\n");
}

/// Renders one content line without its line terminator.
///
/// Returns `None` when the value is empty, so such lines are omitted.
#[must_use]
pub fn serialize_line(
    line: &VCardLine,
    version: VCardVersion,
    options: SerializeOptions,
) -> Option<String> {
    if line.value.is_empty() {
        return None;
    }

    let mut head = String::new();
    if let Some(group) = &line.group {
        head.push_str(group);
        head.push('.');
    }
    head.push_str(&line.identifier);
    for param in &line.params {
        write_parameter(&mut head, param, version);
    }

    let binary = matches!(line.value, VCardValue::Binary(_));
    if binary && line.param_value(names::ENCODING).is_none() {
        let token = match version {
            VCardVersion::V2_1 => "BASE64",
            VCardVersion::V3_0 => "b",
        };
        write!(head, ";ENCODING={token}").ok();
    }
    head.push(':');

    let text = value_text(&line.value);
    if line.is_quoted_printable() && !binary {
        let encoded = encode_quoted_printable(text.as_bytes());
        return Some(if options.fold {
            fold_quoted_printable(&head, &encoded)
        } else {
            head + &encoded
        });
    }

    let full = head + &text;
    Some(if options.fold { fold_line(&full) } else { full })
}

/// Renders a value as it appears after the `:`, before any
/// quoted-printable encoding. Binary values become base64.
#[must_use]
pub fn value_text(value: &VCardValue) -> String {
    match value {
        VCardValue::Text(s) => s.clone(),
        VCardValue::Binary(bytes) => encode_base64(bytes),
        VCardValue::Structured(parts) => join_escaped(parts, ';'),
        VCardValue::TextList(items) => join_escaped(items, ','),
        VCardValue::DateTime(date) => format_date_time(date),
        VCardValue::Geo(geo) => format_geo(geo),
        VCardValue::UtcOffset(minutes) => format_utc_offset(*minutes),
        VCardValue::Class(secrecy) => format_class(*secrecy).to_string(),
    }
}

/// Writes one parameter. Names are uppercased and each value is written
/// as its own `;NAME=value`; 2.1 TYPE values are written as bare tokens.
fn write_parameter(out: &mut String, param: &VCardParameter, version: VCardVersion) {
    let name = param.name.to_ascii_uppercase();
    for value in &param.values {
        if version == VCardVersion::V2_1 && param.name == names::TYPE {
            write!(out, ";{value}").ok();
        } else {
            write!(out, ";{name}={}", quote_param_value(value)).ok();
        }
    }
}

/// Quotes parameter values containing separators. Double quotes cannot be
/// represented and are dropped.
fn quote_param_value(value: &str) -> String {
    if value.contains([':', ';', ',', '"']) {
        format!("\"{}\"", value.replace('"', ""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abook_core::model::{ContactDate, Geo, Secrecy};
    use chrono::NaiveDate;

    fn line(identifier: &str, value: impl Into<VCardValue>) -> VCardLine {
        VCardLine::new(identifier, value)
    }

    fn no_fold() -> SerializeOptions {
        SerializeOptions { fold: false }
    }

    #[test]
    fn card_framing() {
        let mut card = VCard::new(VCardVersion::V3_0);
        card.add_line(line("VERSION", "3.0"));
        card.add_line(line("FN", "Jane Doe"));
        let output = serialize_single(&card);
        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn empty_values_are_omitted() {
        let mut card = VCard::default();
        card.add_line(line("NOTE", ""));
        card.add_line(line("N", VCardValue::Structured(vec![String::new(); 5])));
        let output = serialize_single(&card);
        assert!(!output.contains("NOTE"));
        assert!(!output.contains("\r\nN:"));
    }

    #[test]
    fn parameters_3_0() {
        let tel = line("TEL", "123")
            .with_param(VCardParameter::type_param("HOME"))
            .with_param(VCardParameter::multi(
                "type",
                vec!["VOICE".into(), "PREF".into()],
            ));
        assert_eq!(
            serialize_line(&tel, VCardVersion::V3_0, no_fold()).unwrap(),
            "TEL;TYPE=HOME;TYPE=VOICE;TYPE=PREF:123"
        );
    }

    #[test]
    fn parameters_2_1_bare_types() {
        let tel = line("TEL", "123")
            .with_param(VCardParameter::type_param("HOME"))
            .with_param(VCardParameter::type_param("FAX"));
        assert_eq!(
            serialize_line(&tel, VCardVersion::V2_1, no_fold()).unwrap(),
            "TEL;HOME;FAX:123"
        );
    }

    #[test]
    fn quoted_parameter_value() {
        let l = line("X-FOO", "v").with_param(VCardParameter::new("x-label", "a;b"));
        assert_eq!(
            serialize_line(&l, VCardVersion::V3_0, no_fold()).unwrap(),
            "X-FOO;X-LABEL=\"a;b\":v"
        );
    }

    #[test]
    fn binary_adds_encoding() {
        let l = line("PHOTO", vec![0u8, 1, 2]);
        assert_eq!(
            serialize_line(&l, VCardVersion::V3_0, no_fold()).unwrap(),
            "PHOTO;ENCODING=b:AAEC"
        );
        assert_eq!(
            serialize_line(&l, VCardVersion::V2_1, no_fold()).unwrap(),
            "PHOTO;ENCODING=BASE64:AAEC"
        );
    }

    #[test]
    fn quoted_printable_output() {
        let l = line("FN", "Jürgen")
            .with_param(VCardParameter::charset("UTF-8"))
            .with_param(VCardParameter::encoding("QUOTED-PRINTABLE"));
        assert_eq!(
            serialize_line(&l, VCardVersion::V2_1, no_fold()).unwrap(),
            "FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:J=C3=BCrgen"
        );
    }

    #[test]
    fn typed_values() {
        let date = ContactDate::date(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap());
        assert_eq!(value_text(&VCardValue::DateTime(date)), "1990-05-17");
        assert_eq!(value_text(&VCardValue::Geo(Geo::new(1.0, 2.0))), "1.000000;2.000000");
        assert_eq!(value_text(&VCardValue::UtcOffset(-300)), "-05:00");
        assert_eq!(value_text(&VCardValue::Class(Secrecy::Private)), "PRIVATE");
        assert_eq!(
            value_text(&VCardValue::Structured(vec!["Doe".into(), "Jane; Jr".into()])),
            r"Doe;Jane\; Jr"
        );
        assert_eq!(
            value_text(&VCardValue::TextList(vec!["a,b".into(), "c".into()])),
            r"a\,b,c"
        );
    }

    #[test]
    fn long_lines_are_folded() {
        let mut card = VCard::default();
        card.add_line(line("NOTE", "x".repeat(200)));
        let output = serialize_single(&card);
        assert!(output.split("\r\n").all(|l| l.len() <= 75));
        assert!(output.contains("\r\n x"));

        let unfolded = serialize_with(std::slice::from_ref(&card), no_fold());
        assert!(unfolded.contains(&format!("NOTE:{}", "x".repeat(200))));
    }
}
