//! Contact record value types.
//!
//! These are plain data holders exchanged between the vCard mapper and the
//! surrounding application:
//!
//! - [`Addressee`] - one contact, owning its addresses, phone numbers and agent
//! - [`Address`] / [`AddressType`] - postal address with a type bitmask
//! - [`PhoneNumber`] / [`PhoneType`] - telephone number with a type bitmask
//! - [`Geo`], [`TimeZone`], [`Secrecy`], [`ContactDate`] - scalar structured values
//! - [`Key`], [`Media`], [`Agent`] - binary-or-reference assets

mod address;
mod addressee;
mod key;
mod media;
mod phone_number;
mod values;

pub use address::{Address, AddressType};
pub use addressee::{Addressee, Agent, CustomField};
pub use key::{Key, KeyData, KeyType};
pub use media::Media;
pub use phone_number::{PhoneNumber, PhoneType};
pub use values::{ContactDate, Geo, Secrecy, TimeZone};

/// Generates a fresh identifier for records and sub-records.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
