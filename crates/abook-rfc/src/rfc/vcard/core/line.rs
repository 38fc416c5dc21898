//! A single content line of a card.

use super::parameter::{VCardParameter, names};
use super::value::VCardValue;

/// One field occurrence: `[group.]IDENTIFIER[;param...]:value`.
#[derive(Debug, Clone, PartialEq)]
pub struct VCardLine {
    /// Optional group (e.g. "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Identifier as written in the source.
    pub identifier: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    pub value: VCardValue,
}

impl VCardLine {
    #[must_use]
    pub fn new(identifier: impl Into<String>, value: impl Into<VCardValue>) -> Self {
        Self {
            group: None,
            identifier: identifier.into(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Lowercase identifier used for dispatch.
    #[must_use]
    pub fn key(&self) -> String {
        self.identifier.to_ascii_lowercase()
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }

    /// Returns every value of every parameter named `name`.
    pub fn param_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.params
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
            .flat_map(|p| p.values.iter().map(String::as_str))
    }

    /// Returns the first value of the named parameter.
    #[must_use]
    pub fn param_value<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        self.param_values(name).next()
    }

    /// Returns whether the named parameter carries `value` (case-insensitive).
    #[must_use]
    pub fn has_param_value(&self, name: &str, value: &str) -> bool {
        self.param_values(name).any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Returns the TYPE tokens of this line.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.param_values(names::TYPE)
    }

    /// Returns whether the line is quoted-printable encoded.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.has_param_value(names::ENCODING, names::QUOTED_PRINTABLE)
    }

    /// Returns whether the value is declared as a URI (`VALUE=uri`).
    #[must_use]
    pub fn is_uri(&self) -> bool {
        self.has_param_value(names::VALUE, names::URI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_lowercase() {
        let line = VCardLine::new("X-KADDRESSBOOK-Spouse", "Sam");
        assert_eq!(line.key(), "x-kaddressbook-spouse");
        assert_eq!(line.identifier, "X-KADDRESSBOOK-Spouse");
    }

    #[test]
    fn params_accumulate() {
        let line = VCardLine::new("TEL", "123")
            .with_param(VCardParameter::type_param("HOME"))
            .with_param(VCardParameter::multi(
                "TYPE",
                vec!["voice".into(), "pref".into()],
            ));

        let types: Vec<&str> = line.types().collect();
        assert_eq!(types, vec!["HOME", "voice", "pref"]);
        assert!(line.has_param_value("type", "PREF"));
        assert!(!line.is_uri());
    }

    #[test]
    fn param_value_with_runtime_name() {
        let line = VCardLine::new("PHOTO", "AAEC")
            .with_param(VCardParameter::encoding("b"))
            .with_param(VCardParameter::value_type("binary"));

        let name = String::from("Encoding");
        assert_eq!(line.param_value(&name), Some("b"));
        assert_eq!(line.param_value(names::VALUE), Some("binary"));
        assert_eq!(line.param_value("charset"), None);
    }
}
