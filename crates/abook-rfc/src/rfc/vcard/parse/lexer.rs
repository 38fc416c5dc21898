//! vCard lexer: physical line splitting and content line parsing.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::codec::{decode_base64, decode_charset, decode_quoted_printable};
use crate::rfc::vcard::core::{VCardLine, VCardParameter, VCardValue, names};

/// Splits input into physical lines on CRLF, LF or a lone CR.
///
/// Line numbers are 1-based. Folding is not undone here; the card parser
/// joins continuation lines because that depends on the line's encoding.
#[must_use]
pub fn physical_lines(input: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '\r' || c == '\n' {
            lines.push((lines.len() + 1, &input[start..i]));
            if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
                chars.next();
                start = i + 2;
            } else {
                start = i + 1;
            }
        }
    }

    if start < input.len() {
        lines.push((lines.len() + 1, &input[start..]));
    }

    lines
}

/// Parses one unfolded content line.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// The value is decoded according to its `ENCODING` parameter: base64
/// becomes [`VCardValue::Binary`], quoted-printable is decoded into text
/// using `CHARSET`. Backslash escapes are left in place.
///
/// ## Errors
/// Returns an error if the line has no `:` separator or no identifier.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<VCardLine> {
    let colon_pos =
        find_value_separator(line).ok_or_else(|| ParseError::missing_separator(line_num))?;

    let (head, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (name_part, params_str) = match head.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (head, None),
    };
    let (group, name) = parse_group(name_part.trim());

    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "empty property name",
        ));
    }

    let params = params_str.map(parse_parameters).unwrap_or_default();
    let value = decode_value(value, &params, line_num);

    Ok(VCardLine {
        group: group.map(String::from),
        identifier: name.to_string(),
        params,
        value,
    })
}

/// Returns the lowercase `ENCODING` declared by a raw line, if any.
///
/// Used to decide how continuation lines are joined before the line is parsed.
#[must_use]
pub(super) fn declared_encoding(line: &str) -> Option<String> {
    let head = &line[..find_value_separator(line)?];
    let (_, params) = head.split_once(';')?;
    parse_parameters(params)
        .into_iter()
        .find(|p| p.name == names::ENCODING)
        .and_then(|p| p.value().map(str::to_ascii_lowercase))
}

/// Finds the colon that separates name/params from value.
///
/// Colons inside quoted parameter values or after a backslash do not count.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some((potential_group, name)) = s.split_once('.') {
        // Group must be alphanumeric + hyphen
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), name);
        }
    }
    (None, s)
}

/// Parses the parameter list after the identifier.
fn parse_parameters(s: &str) -> Vec<VCardParameter> {
    split_unquoted(s, ';')
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_single_parameter)
        .collect()
}

/// Parses `name=value[,value]` or a bare 2.1 token.
fn parse_single_parameter(token: &str) -> VCardParameter {
    let Some((name, values)) = token.split_once('=') else {
        return bare_parameter(token);
    };

    let values = split_unquoted(values, ',')
        .into_iter()
        .map(|v| v.trim().trim_matches('"').to_string())
        .collect();

    VCardParameter::multi(name.trim(), values)
}

/// Maps a bare token to the parameter it abbreviates.
fn bare_parameter(token: &str) -> VCardParameter {
    match token.to_ascii_uppercase().as_str() {
        "QUOTED-PRINTABLE" => VCardParameter::encoding(names::QUOTED_PRINTABLE),
        "BASE64" | "B" => VCardParameter::encoding(names::B),
        "8BIT" | "7BIT" => VCardParameter::encoding(token.to_ascii_lowercase()),
        _ => VCardParameter::type_param(token),
    }
}

/// Splits on `sep` outside double quotes.
fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == sep && !in_quotes {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Decodes the raw value according to the line's encoding parameters.
fn decode_value(raw: &str, params: &[VCardParameter], line_num: usize) -> VCardValue {
    let encoding = first_value(params, names::ENCODING).map(str::to_ascii_lowercase);
    match encoding.as_deref() {
        Some(names::B | names::BASE64) => match decode_base64(raw) {
            Ok(bytes) => VCardValue::Binary(bytes),
            Err(e) => {
                tracing::warn!(line = line_num, error = %e, "Undecodable base64 value, keeping raw text");
                VCardValue::Text(raw.to_string())
            }
        },
        Some(names::QUOTED_PRINTABLE) => {
            let bytes = decode_quoted_printable(raw);
            VCardValue::Text(decode_charset(&bytes, first_value(params, names::CHARSET)))
        }
        _ => VCardValue::Text(raw.to_string()),
    }
}

fn first_value<'a>(params: &'a [VCardParameter], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|p| p.name == name)
        .and_then(VCardParameter::value)
}
