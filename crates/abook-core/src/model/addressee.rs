//! The contact record.

use serde::{Deserialize, Serialize};

use super::{Address, ContactDate, Geo, Key, Media, PhoneNumber, Secrecy, TimeZone};

/// Secondary contact (vCard `AGENT`), either referenced or embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Agent {
    Url(String),
    Addressee(Box<Addressee>),
}

/// Vendor extension value, written as `X-<app>-<name>`, or `X-<app>` when
/// `name` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub app: String,
    pub name: String,
    pub value: String,
}

/// One contact.
///
/// `emails` is ordered; the first entry is the preferred address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Addressee {
    pub uid: String,
    pub name: String,
    pub formatted_name: String,
    pub family_name: String,
    pub given_name: String,
    pub additional_name: String,
    pub prefix: String,
    pub suffix: String,
    pub nick_name: String,
    pub birthday: Option<ContactDate>,
    pub mailer: String,
    pub time_zone: Option<TimeZone>,
    pub geo: Option<Geo>,
    pub title: String,
    pub role: String,
    pub organization: String,
    pub note: String,
    pub product_id: String,
    pub revision: Option<ContactDate>,
    pub sort_string: String,
    pub url: String,
    pub secrecy: Option<Secrecy>,
    pub logo: Media,
    pub photo: Media,
    pub sound: Media,
    pub agent: Option<Agent>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<PhoneNumber>,
    pub addresses: Vec<Address>,
    pub keys: Vec<Key>,
    pub categories: Vec<String>,
    pub customs: Vec<CustomField>,
}

impl Addressee {
    /// Creates an empty contact with a freshly generated uid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            uid: super::new_id(),
            ..Self::default()
        }
    }

    /// Returns whether no field other than `uid` is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let blank = Self {
            uid: self.uid.clone(),
            ..Self::default()
        };
        *self == blank
    }

    /// Adds an email address.
    ///
    /// A preferred address moves to the front. Adding an address that is
    /// already present only changes its position when `preferred` is set.
    pub fn insert_email(&mut self, email: impl Into<String>, preferred: bool) {
        let email = email.into();
        if let Some(pos) = self.emails.iter().position(|e| *e == email) {
            if preferred && pos != 0 {
                let existing = self.emails.remove(pos);
                self.emails.insert(0, existing);
            }
            return;
        }
        if preferred {
            self.emails.insert(0, email);
        } else {
            self.emails.push(email);
        }
    }

    pub fn remove_email(&mut self, email: &str) {
        self.emails.retain(|e| e != email);
    }

    #[must_use]
    pub fn preferred_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// Inserts a phone number, replacing one with the same id.
    pub fn insert_phone_number(&mut self, phone: PhoneNumber) {
        if let Some(existing) = self.phone_numbers.iter_mut().find(|p| p.id == phone.id) {
            *existing = phone;
        } else {
            self.phone_numbers.push(phone);
        }
    }

    pub fn remove_phone_number(&mut self, id: &str) {
        self.phone_numbers.retain(|p| p.id != id);
    }

    /// Inserts an address, replacing one with the same id.
    pub fn insert_address(&mut self, address: Address) {
        if let Some(existing) = self.addresses.iter_mut().find(|a| a.id == address.id) {
            *existing = address;
        } else {
            self.addresses.push(address);
        }
    }

    pub fn remove_address(&mut self, id: &str) {
        self.addresses.retain(|a| a.id != id);
    }

    /// Inserts a key, replacing one with the same id.
    pub fn insert_key(&mut self, key: Key) {
        if let Some(existing) = self.keys.iter_mut().find(|k| k.id == key.id) {
            *existing = key;
        } else {
            self.keys.push(key);
        }
    }

    /// Appends a category unless it is already present.
    pub fn insert_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Sets a vendor extension value, replacing an existing one for the same
    /// `app` and `name`. An empty `app` is ignored; an empty `name` stands
    /// for an extension without a namespace.
    pub fn insert_custom(&mut self, app: &str, name: &str, value: impl Into<String>) {
        if app.is_empty() {
            return;
        }
        let value = value.into();
        if let Some(existing) = self
            .customs
            .iter_mut()
            .find(|c| c.app == app && c.name == name)
        {
            existing.value = value;
        } else {
            self.customs.push(CustomField {
                app: app.to_string(),
                name: name.to_string(),
                value,
            });
        }
    }

    #[must_use]
    pub fn custom(&self, app: &str, name: &str) -> Option<&str> {
        self.customs
            .iter()
            .find(|c| c.app == app && c.name == name)
            .map(|c| c.value.as_str())
    }

    pub fn remove_custom(&mut self, app: &str, name: &str) {
        self.customs.retain(|c| !(c.app == app && c.name == name));
    }

    /// Returns the display name: the formatted name if set, otherwise the
    /// name parts joined by spaces.
    #[must_use]
    pub fn real_name(&self) -> String {
        if !self.formatted_name.is_empty() {
            return self.formatted_name.clone();
        }
        [
            self.prefix.as_str(),
            self.given_name.as_str(),
            self.additional_name.as_str(),
            self.family_name.as_str(),
            self.suffix.as_str(),
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Formats `email` (or the preferred address when `None`) as
    /// `Real Name <email>`. Names with RFC 822 specials are quoted.
    #[must_use]
    pub fn full_email(&self, email: Option<&str>) -> String {
        let email = email.or_else(|| self.preferred_email()).unwrap_or_default();
        let name = self.real_name();
        if name.is_empty() {
            return email.to_string();
        }
        let needs_quotes = name.chars().any(|c| "()<>@,;:\\\".[]".contains(c));
        if needs_quotes {
            let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{escaped}\" <{email}>")
        } else {
            format!("{name} <{email}>")
        }
    }
}
