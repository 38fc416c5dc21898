//! A parsed or to-be-serialized card.

use std::fmt;
use std::str::FromStr;

use abook_core::error::CoreError;

use super::line::VCardLine;
use crate::error::RfcError;

/// Supported vCard versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VCardVersion {
    /// vCard 2.1 (legacy, quoted-printable text, bare TYPE tokens).
    V2_1,
    /// vCard 3.0 (RFC 2426).
    #[default]
    V3_0,
}

impl VCardVersion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
        }
    }

    /// Parses a `VERSION` value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V2_1),
            "3.0" => Some(Self::V3_0),
            _ => None,
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VCardVersion {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnsupportedVersion(s.to_string()).into())
    }
}

/// One card: its content lines in document order.
///
/// Lookups by identifier are case-insensitive. [`VCard::groups`] offers a
/// per-identifier view without losing the order of the underlying lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VCard {
    pub version: VCardVersion,
    lines: Vec<VCardLine>,
}

impl VCard {
    #[must_use]
    pub fn new(version: VCardVersion) -> Self {
        Self {
            version,
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: VCardLine) {
        self.lines.push(line);
    }

    /// Returns the lines for an identifier, in document order.
    pub fn lines<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = &'a VCardLine> {
        self.lines
            .iter()
            .filter(move |l| l.identifier.eq_ignore_ascii_case(identifier))
    }

    /// Returns the first line for an identifier.
    #[must_use]
    pub fn first(&self, identifier: &str) -> Option<&VCardLine> {
        self.lines
            .iter()
            .find(|l| l.identifier.eq_ignore_ascii_case(identifier))
    }

    /// Returns the most recently added line for an identifier.
    pub fn last_mut(&mut self, identifier: &str) -> Option<&mut VCardLine> {
        self.lines
            .iter_mut()
            .rev()
            .find(|l| l.identifier.eq_ignore_ascii_case(identifier))
    }

    /// Groups lines by lowercase identifier, in first-appearance order.
    #[must_use]
    pub fn groups(&self) -> Vec<(String, Vec<&VCardLine>)> {
        let mut groups: Vec<(String, Vec<&VCardLine>)> = Vec::new();
        for line in &self.lines {
            let key = line.key();
            if let Some((_, lines)) = groups.iter_mut().find(|(k, _)| *k == key) {
                lines.push(line);
            } else {
                groups.push((key, vec![line]));
            }
        }
        groups
    }

    /// Iterates over every line in document order.
    pub fn all_lines(&self) -> impl Iterator<Item = &VCardLine> {
        self.lines.iter()
    }

    /// Returns the distinct lowercase identifiers in first-appearance order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.groups().into_iter().map(|(key, _)| key).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
