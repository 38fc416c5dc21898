//! Line value payloads.

use abook_core::model::{ContactDate, Geo, Secrecy};

/// The payload of a [`VCardLine`](super::VCardLine).
///
/// The parser only produces `Text` and `Binary`; the typed variants are
/// built by the contact mapper and rendered by the serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum VCardValue {
    /// Text in wire form: backslash escapes are kept as written.
    Text(String),

    /// Decoded bytes of a base64 payload.
    Binary(Vec<u8>),

    /// Unescaped sub-fields joined with `;` on output (N, ADR).
    Structured(Vec<String>),

    /// Unescaped items joined with `,` on output (CATEGORIES).
    TextList(Vec<String>),

    /// Date with optional time (BDAY, REV).
    DateTime(ContactDate),

    /// Latitude/longitude pair (GEO).
    Geo(Geo),

    /// Signed minutes from UTC (TZ).
    UtcOffset(i32),

    /// Disclosure class (CLASS).
    Class(Secrecy),
}

impl VCardValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as bytes if applicable.
    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Returns whether the value would serialize to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Binary(b) => b.is_empty(),
            Self::Structured(parts) | Self::TextList(parts) => parts.iter().all(String::is_empty),
            Self::DateTime(_) | Self::Geo(_) | Self::UtcOffset(_) | Self::Class(_) => false,
        }
    }
}

impl From<String> for VCardValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for VCardValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<u8>> for VCardValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Binary(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_from_string() {
        let val: VCardValue = "Hello".into();
        assert_eq!(val.as_text(), Some("Hello"));
        assert_eq!(val.as_binary(), None);
    }

    #[test]
    fn emptiness() {
        assert!(VCardValue::Text(String::new()).is_empty());
        assert!(VCardValue::Structured(vec![String::new(); 5]).is_empty());
        assert!(!VCardValue::Structured(vec![String::new(), "Jane".into()]).is_empty());
        assert!(!VCardValue::UtcOffset(0).is_empty());
    }
}
