//! Quoted-printable, base64 and charset handling.

use std::fmt::Write;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;

use super::CodecError;

/// Decoder that accepts payloads with or without `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes quoted-printable text into raw bytes.
///
/// `=XY` becomes the byte `0xXY`. A trailing `=` (soft break) is dropped, as
/// is `=` followed by a line break. Escapes that are not two hex digits are
/// copied through unchanged.
#[must_use]
pub fn decode_quoted_printable(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let bytes = bytes.strip_suffix(b"=").unwrap_or(bytes);
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'=' {
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(b'\r'), Some(b'\n')) => {
                    i += 3;
                    continue;
                }
                (Some(b'\n'), _) => {
                    i += 2;
                    continue;
                }
                (Some(&hi), Some(&lo)) => {
                    if let (Some(h), Some(l)) = (hex_value(hi), hex_value(lo)) {
                        out.push((h << 4) | l);
                        i += 3;
                        continue;
                    }
                }
                _ => {}
            }
        }
        out.push(b);
        i += 1;
    }

    out
}

/// Encodes bytes as quoted-printable without line breaks.
///
/// Printable ASCII other than `=` is kept; a space is kept unless it is the
/// last byte. Everything else becomes `=XY` with uppercase hex digits.
#[must_use]
pub fn encode_quoted_printable(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, &b) in bytes.iter().enumerate() {
        let last = i + 1 == bytes.len();
        match b {
            b'=' => out.push_str("=3D"),
            b' ' if !last => out.push(' '),
            33..=126 => out.push(char::from(b)),
            _ => {
                write!(out, "={b:02X}").ok();
            }
        }
    }
    out
}

/// Decodes base64, ignoring embedded whitespace and missing padding.
///
/// ## Errors
/// Returns an error if the payload contains characters outside the base64
/// alphabet or has an impossible length.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, CodecError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(LENIENT.decode(compact)?)
}

/// Encodes bytes as standard padded base64 on a single line.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Converts decoded bytes to text using the declared charset.
///
/// Latin-1 and ASCII map each byte to the code point of the same value.
/// Anything else is read as UTF-8, replacing invalid sequences.
#[must_use]
pub fn decode_charset(bytes: &[u8], charset: Option<&str>) -> String {
    let latin1 = charset.is_some_and(|c| {
        matches!(
            c.to_ascii_lowercase().as_str(),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" | "us-ascii" | "ascii"
        )
    });

    if latin1 {
        bytes.iter().copied().map(char::from).collect()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Returns whether text must be quoted-printable encoded in a 2.1 card.
#[must_use]
pub fn needs_encoding(text: &str) -> bool {
    text.chars().any(|c| c != ' ' && !c.is_ascii_graphic())
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
