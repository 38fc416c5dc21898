//! Value codec: transfer encodings, escaping and typed scalar values.
//!
//! Everything here is independent of field semantics; the contact mapper
//! decides which helper applies to which identifier.

mod encoding;
mod escape;
mod values;

use thiserror::Error;

pub use encoding::{
    decode_base64, decode_charset, decode_quoted_printable, encode_base64,
    encode_quoted_printable, needs_encoding,
};
pub use escape::{
    escape_separator, escape_text, join_escaped, split_escaped, unescape_separator, unescape_text,
};
pub use values::{
    format_class, format_date_time, format_geo, format_utc_offset, parse_class, parse_date_time,
    parse_geo, parse_utc_offset,
};

/// Errors from decoding a transfer encoding.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}
