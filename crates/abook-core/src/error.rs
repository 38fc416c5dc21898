use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unsupported vCard version: {0}")]
    UnsupportedVersion(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
