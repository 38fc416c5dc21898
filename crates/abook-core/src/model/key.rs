//! Cryptographic key attached to a contact.

use serde::{Deserialize, Serialize};

/// Payload of a key: either inline bytes or a textual form (e.g. an armored block).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyData {
    Text(String),
    Binary(Vec<u8>),
}

/// Kind of key carried in the `TYPE` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyType {
    X509,
    Pgp,
    /// Any other type token, stored as written.
    Custom(String),
}

impl KeyType {
    /// Maps a `TYPE` token to a key type. Empty tokens yield `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        Some(match token.to_ascii_lowercase().as_str() {
            "x509" => Self::X509,
            "pgp" => Self::Pgp,
            _ => Self::Custom(token.to_string()),
        })
    }

    /// Returns the token written to the `TYPE` parameter.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::X509 => "X509",
            Self::Pgp => "PGP",
            Self::Custom(s) => s,
        }
    }
}

/// Key (vCard `KEY`). Equality ignores `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Key {
    pub id: String,
    pub data: KeyData,
    pub key_type: Option<KeyType>,
}

impl Key {
    #[must_use]
    pub fn text(text: impl Into<String>, key_type: Option<KeyType>) -> Self {
        Self {
            id: super::new_id(),
            data: KeyData::Text(text.into()),
            key_type,
        }
    }

    #[must_use]
    pub fn binary(bytes: Vec<u8>, key_type: Option<KeyType>) -> Self {
        Self {
            id: super::new_id(),
            data: KeyData::Binary(bytes),
            key_type,
        }
    }

    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self.data, KeyData::Binary(_))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.key_type == other.key_type
    }
}
