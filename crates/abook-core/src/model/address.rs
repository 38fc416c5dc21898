//! Postal address.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Kinds of an address. Several may apply at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AddressType: u32 {
        const DOM    = 0b0000_0001;
        const INTL   = 0b0000_0010;
        const POSTAL = 0b0000_0100;
        const PARCEL = 0b0000_1000;
        const HOME   = 0b0001_0000;
        const WORK   = 0b0010_0000;
        const PREF   = 0b0100_0000;
    }
}

impl Default for AddressType {
    fn default() -> Self {
        Self::empty()
    }
}

/// Postal address (vCard `ADR` plus its `LABEL`).
///
/// Equality compares content only; `id` is a local handle used to replace an
/// address in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    pub address_type: AddressType,
    pub post_office_box: String,
    pub extended: String,
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    /// Pre-formatted delivery label.
    pub label: String,
}

impl Address {
    /// Creates an empty address of the given type.
    #[must_use]
    pub fn new(address_type: AddressType) -> Self {
        Self {
            id: super::new_id(),
            address_type,
            post_office_box: String::new(),
            extended: String::new(),
            street: String::new(),
            locality: String::new(),
            region: String::new(),
            postal_code: String::new(),
            country: String::new(),
            label: String::new(),
        }
    }

    /// Returns whether all structured parts are empty. The label is not considered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts().iter().all(|p| p.is_empty())
    }

    /// Returns the seven structured parts in vCard order:
    /// PO box, extended, street, locality, region, postal code, country.
    #[must_use]
    pub fn parts(&self) -> [&str; 7] {
        [
            &self.post_office_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }

    /// Sets the structured parts from a list in vCard order. Missing trailing
    /// parts are left untouched.
    pub fn set_parts<I, S>(&mut self, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: [&mut String; 7] = [
            &mut self.post_office_box,
            &mut self.extended,
            &mut self.street,
            &mut self.locality,
            &mut self.region,
            &mut self.postal_code,
            &mut self.country,
        ];
        for (field, part) in fields.into_iter().zip(parts) {
            *field = part.into();
        }
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::new(AddressType::empty())
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.address_type == other.address_type
            && self.parts() == other.parts()
            && self.label == other.label
    }
}
