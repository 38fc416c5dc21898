//! Telephone number.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Kinds of a telephone number. Several may apply at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PhoneType: u32 {
        const HOME  = 1;
        const WORK  = 1 << 1;
        const MSG   = 1 << 2;
        const PREF  = 1 << 3;
        const VOICE = 1 << 4;
        const FAX   = 1 << 5;
        const CELL  = 1 << 6;
        const VIDEO = 1 << 7;
        const BBS   = 1 << 8;
        const MODEM = 1 << 9;
        const CAR   = 1 << 10;
        const ISDN  = 1 << 11;
        const PCS   = 1 << 12;
        const PAGER = 1 << 13;
    }
}

impl Default for PhoneType {
    fn default() -> Self {
        Self::HOME
    }
}

/// Telephone number (vCard `TEL`).
///
/// Equality compares content only, not `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: String,
    pub number: String,
    pub phone_type: PhoneType,
}

impl PhoneNumber {
    #[must_use]
    pub fn new(number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            id: super::new_id(),
            number: number.into(),
            phone_type,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
    }
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self::new(String::new(), PhoneType::default())
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.phone_type == other.phone_type
    }
}
