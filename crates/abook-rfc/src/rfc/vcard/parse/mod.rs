//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use abook_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input);
//! assert_eq!(cards.len(), 1);
//! assert_eq!(cards[0].first("FN").and_then(|l| l.value.as_text()), Some("John Doe"));
//! ```
//!
//! ## Features
//!
//! - Supports vCard 2.1 and 3.0
//! - Handles line folding/unfolding and quoted-printable soft breaks
//! - Joins 2.1 base64 continuation lines
//! - Parses property groups (item1.TEL) and bare 2.1 parameters (`TEL;HOME:`)
//! - Captures nested 2.1 `AGENT` cards
//! - Skips malformed lines and unterminated cards

mod error;
mod lexer;
mod parser;

#[cfg(test)]
mod error_tests;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, physical_lines};
pub use parser::{parse, parse_single};
