//! vCard parse error types.

use std::fmt;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a line or card.
///
/// The card parser logs and skips these; they only surface from the
/// line-level helpers and [`parse_single`](super::parse_single).
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a missing separator error.
    #[must_use]
    pub fn missing_separator(line: usize) -> Self {
        Self::new(
            ParseErrorKind::MissingSeparator,
            line,
            "missing colon separator",
        )
    }

    /// Creates an error for input that holds no complete card.
    #[must_use]
    pub fn no_card(line: usize) -> Self {
        Self::new(ParseErrorKind::NoCard, line, "no BEGIN:VCARD ... END:VCARD block found")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Line without a `:` between name and value.
    MissingSeparator,
    /// Empty or malformed identifier.
    InvalidPropertyName,
    /// Input contained no complete card.
    NoCard,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing separator"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::NoCard => write!(f, "no card"),
        }
    }
}
