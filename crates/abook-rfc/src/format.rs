//! Contact file formats.
//!
//! Formats are looked up by tag in a [`FormatRegistry`] that the caller
//! builds and owns.

use abook_core::model::Addressee;

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::{ToolOptions, VCardTool, VCardVersion};

/// A contact file format.
pub trait ContactFormat: Send + Sync {
    /// Short identifier used on the command line, e.g. `vcard`.
    fn tag(&self) -> &str;

    /// Human readable name.
    fn description(&self) -> &str;

    /// Parses every contact in `text`. Malformed input yields fewer contacts.
    fn parse(&self, text: &str) -> Vec<Addressee>;

    fn serialize(&self, addressees: &[Addressee]) -> String;
}

/// vCard in a fixed output version.
#[derive(Debug, Clone)]
pub struct VCardFormat {
    tag: String,
    description: String,
    version: VCardVersion,
    tool: VCardTool,
}

impl VCardFormat {
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        description: impl Into<String>,
        version: VCardVersion,
        options: ToolOptions,
    ) -> Self {
        Self {
            tag: tag.into(),
            description: description.into(),
            version,
            tool: VCardTool::with_options(options),
        }
    }

    #[must_use]
    pub const fn version(&self) -> VCardVersion {
        self.version
    }
}

impl ContactFormat for VCardFormat {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parse(&self, text: &str) -> Vec<Addressee> {
        self.tool.parse_vcards(text)
    }

    fn serialize(&self, addressees: &[Addressee]) -> String {
        self.tool.create_vcards(addressees, self.version)
    }
}

/// Formats keyed by tag, in registration order.
#[derive(Default)]
pub struct FormatRegistry {
    formats: Vec<Box<dyn ContactFormat>>,
}

impl FormatRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `vcard` (3.0) and `vcard21` (2.1).
    #[must_use]
    pub fn with_defaults(options: ToolOptions) -> Self {
        let mut registry = Self::new();
        registry.register(VCardFormat::new(
            "vcard",
            "vCard 3.0 (RFC 2426)",
            VCardVersion::V3_0,
            options,
        ));
        registry.register(VCardFormat::new(
            "vcard21",
            "vCard 2.1",
            VCardVersion::V2_1,
            options,
        ));
        registry
    }

    /// Adds a format, replacing any format with the same tag.
    pub fn register(&mut self, format: impl ContactFormat + 'static) {
        if let Some(existing) = self.formats.iter_mut().find(|f| f.tag() == format.tag()) {
            tracing::debug!(tag = format.tag(), "Replacing registered format");
            *existing = Box::new(format);
        } else {
            tracing::debug!(tag = format.tag(), "Registering format");
            self.formats.push(Box::new(format));
        }
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&dyn ContactFormat> {
        self.formats
            .iter()
            .find(|f| f.tag().eq_ignore_ascii_case(tag))
            .map(AsRef::as_ref)
    }

    /// Looks up a format by tag.
    ///
    /// ## Errors
    /// Returns [`RfcError::UnknownFormat`] if no format has this tag.
    pub fn require(&self, tag: &str) -> RfcResult<&dyn ContactFormat> {
        self.get(tag)
            .ok_or_else(|| RfcError::UnknownFormat(tag.to_string()))
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.formats.iter().map(|f| f.tag())
    }

    pub fn formats(&self) -> impl Iterator<Item = &dyn ContactFormat> {
        self.formats.iter().map(AsRef::as_ref)
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl ContactFormat for Upper {
        fn tag(&self) -> &str {
            "vcard"
        }

        fn description(&self) -> &str {
            "shouting vCard"
        }

        fn parse(&self, _text: &str) -> Vec<Addressee> {
            Vec::new()
        }

        fn serialize(&self, addressees: &[Addressee]) -> String {
            crate::rfc::vcard::tool::serialize(addressees, VCardVersion::V3_0).to_uppercase()
        }
    }

    #[test]
    fn defaults_are_registered_in_order() {
        let registry = FormatRegistry::with_defaults(ToolOptions::default());
        assert_eq!(registry.tags().collect::<Vec<_>>(), vec!["vcard", "vcard21"]);
        assert_eq!(registry.get("VCARD21").map(|f| f.tag()), Some("vcard21"));
        assert!(registry.get("ldif").is_none());
    }

    #[test]
    fn require_reports_unknown_tag() {
        let registry = FormatRegistry::new();
        let err = registry.require("csv").err().unwrap();
        assert!(matches!(err, RfcError::UnknownFormat(tag) if tag == "csv"));
    }

    #[test]
    fn register_replaces_same_tag() {
        let mut registry = FormatRegistry::with_defaults(ToolOptions::default());
        registry.register(Upper);
        assert_eq!(registry.tags().count(), 2);
        assert_eq!(registry.require("vcard").unwrap().description(), "shouting vCard");
    }

    #[test]
    fn formats_write_their_version() {
        let registry = FormatRegistry::with_defaults(ToolOptions::default());
        let mut jane = Addressee::new();
        jane.formatted_name = "Jane Doe".to_string();

        let v30 = registry.require("vcard").unwrap().serialize(std::slice::from_ref(&jane));
        let v21 = registry.require("vcard21").unwrap().serialize(std::slice::from_ref(&jane));
        assert!(v30.contains("VERSION:3.0\r\n"));
        assert!(v21.contains("VERSION:2.1\r\n"));

        let back = registry.require("vcard").unwrap().parse(&v21);
        assert_eq!(back, vec![jane]);
    }
}
