//! Picture or sound asset.

use serde::{Deserialize, Serialize};

/// Asset used for `PHOTO`, `LOGO` and `SOUND`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Media {
    #[default]
    None,
    /// Reference to an external resource.
    Url(String),
    /// Inline bytes with an optional media type token (e.g. `JPEG`, `WAVE`).
    Inline { data: Vec<u8>, media_type: String },
}

impl Media {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
