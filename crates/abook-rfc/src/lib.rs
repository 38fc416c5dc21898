//! vCard engine for the address-book workspace.
//!
//! - [`rfc::vcard`] - line codec, card parser/serializer and the contact mapper
//! - [`format`] - explicit registry of contact file formats
//! - [`error`] - crate error type

pub mod error;
pub mod format;
pub mod rfc;
