//! vCard implementation (versions 2.1 and 3.0).
//!
//! ## Overview
//!
//! The engine is layered:
//!
//! - [`codec`] - quoted-printable, base64, escaping and typed scalar values
//! - [`parse`] - content line lexer and the card parser
//! - [`build`] - card serializer and line folding
//! - [`tool`] - mapping between cards and contact records
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use abook_rfc::rfc::vcard::tool;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! N:Doe;Jane;;;\r\n\
//! FN:Jane Doe\r\n\
//! EMAIL:jane@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = tool::parse(input);
//! assert_eq!(contacts[0].formatted_name, "Jane Doe");
//! assert_eq!(contacts[0].preferred_email(), Some("jane@example.com"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use abook_core::model::Addressee;
//! use abook_rfc::rfc::vcard::{VCardVersion, tool};
//!
//! let mut jane = Addressee::new();
//! jane.formatted_name = "Jane Doe".to_string();
//! jane.insert_email("jane@example.com", true);
//!
//! let output = tool::serialize(&[jane], VCardVersion::V3_0);
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```

pub mod build;
pub mod codec;
pub mod core;
pub mod parse;
pub mod tool;

#[cfg(test)]
mod tests;

pub use build::{SerializeOptions, serialize, serialize_single};
pub use core::{VCard, VCardLine, VCardParameter, VCardValue, VCardVersion};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};
pub use tool::{ToolOptions, VCardTool};
