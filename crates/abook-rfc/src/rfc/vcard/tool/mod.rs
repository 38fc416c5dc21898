//! Mapping between cards and contact records.
//!
//! [`VCardTool`] turns parsed cards into [`Addressee`] values and back. It is
//! best-effort in both directions: malformed fields are skipped (and logged)
//! rather than reported as errors.

mod build;
mod parse;
mod types;


use abook_core::config::VCardConfig;
use abook_core::constants::DEFAULT_MAX_AGENT_DEPTH;
use abook_core::model::Addressee;

use crate::rfc::vcard::build::{SerializeOptions, serialize_with};
use crate::rfc::vcard::core::{VCard, VCardVersion};

pub use types::{ADDRESS_TYPES, PHONE_TYPES, address_type, phone_type};

/// Mapper settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOptions {
    /// How many levels of embedded AGENT cards are followed.
    pub max_agent_depth: usize,
    /// Fold long output lines.
    pub fold_lines: bool,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            max_agent_depth: DEFAULT_MAX_AGENT_DEPTH,
            fold_lines: true,
        }
    }
}

impl From<&VCardConfig> for ToolOptions {
    fn from(config: &VCardConfig) -> Self {
        Self {
            max_agent_depth: config.max_agent_depth,
            fold_lines: config.fold_lines,
        }
    }
}

/// Converts between vCard text and contact records.
#[derive(Debug, Clone, Copy, Default)]
pub struct VCardTool {
    options: ToolOptions,
}

impl VCardTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(options: ToolOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> ToolOptions {
        self.options
    }

    /// Parses every card in `text` into a contact record.
    ///
    /// Input without complete cards yields an empty list.
    #[must_use]
    #[tracing::instrument(skip(self, text), fields(input_len = text.len()))]
    pub fn parse_vcards(&self, text: &str) -> Vec<Addressee> {
        let addressees = parse::addressees(text, 0, self.options);
        tracing::debug!(count = addressees.len(), "Mapped vCards to contacts");
        addressees
    }

    /// Parses the first card in `text`.
    #[must_use]
    pub fn parse_vcard(&self, text: &str) -> Option<Addressee> {
        self.parse_vcards(text).into_iter().next()
    }

    /// Converts contact records into cards without serializing them.
    #[must_use]
    pub fn create_cards(&self, addressees: &[Addressee], version: VCardVersion) -> Vec<VCard> {
        addressees
            .iter()
            .map(|a| build::card(a, version, 0, self.options))
            .collect()
    }

    /// Serializes contact records as vCards of the given version.
    #[must_use]
    #[tracing::instrument(skip(self, addressees), fields(count = addressees.len(), version = %version))]
    pub fn create_vcards(&self, addressees: &[Addressee], version: VCardVersion) -> String {
        let cards = self.create_cards(addressees, version);
        serialize_with(
            &cards,
            SerializeOptions {
                fold: self.options.fold_lines,
            },
        )
    }

    /// Serializes one contact record.
    #[must_use]
    pub fn create_vcard(&self, addressee: &Addressee, version: VCardVersion) -> String {
        self.create_vcards(std::slice::from_ref(addressee), version)
    }
}

/// Parses contact records with default options.
#[must_use]
pub fn parse(text: &str) -> Vec<Addressee> {
    VCardTool::default().parse_vcards(text)
}

/// Serializes contact records with default options.
#[must_use]
pub fn serialize(addressees: &[Addressee], version: VCardVersion) -> String {
    VCardTool::default().create_vcards(addressees, version)
}
