use thiserror::Error;

use crate::rfc::vcard::ParseError;

/// vCard engine errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Unknown contact format: {0}")]
    UnknownFormat(String),

    #[error(transparent)]
    CoreError(#[from] abook_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
