use thiserror::Error;

/// Command errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    RfcError(#[from] abook_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] abook_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
