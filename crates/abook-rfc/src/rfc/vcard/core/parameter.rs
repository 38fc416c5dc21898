//! vCard line parameters.

/// A line parameter.
///
/// Parameters can have multiple values (e.g. `TYPE=home,work`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to lowercase).
    pub name: String,
    /// Parameter values, unquoted.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new(names::TYPE, value)
    }

    /// Creates an ENCODING parameter.
    #[must_use]
    pub fn encoding(value: impl Into<String>) -> Self {
        Self::new(names::ENCODING, value)
    }

    /// Creates a CHARSET parameter.
    #[must_use]
    pub fn charset(value: impl Into<String>) -> Self {
        Self::new(names::CHARSET, value)
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::new(names::VALUE, type_name)
    }
}

/// Parameter names and well-known values, lowercase.
pub mod names {
    pub const TYPE: &str = "type";
    pub const ENCODING: &str = "encoding";
    pub const CHARSET: &str = "charset";
    pub const VALUE: &str = "value";

    pub const QUOTED_PRINTABLE: &str = "quoted-printable";
    pub const BASE64: &str = "base64";
    pub const B: &str = "b";
    pub const URI: &str = "uri";
    pub const PREF: &str = "pref";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_single_value() {
        let param = VCardParameter::new("TYPE", "home");
        assert_eq!(param.name, "type");
        assert_eq!(param.value(), Some("home"));
    }

    #[test]
    fn parameter_has_value() {
        let param = VCardParameter::multi("TYPE", vec!["home".into(), "work".into()]);
        assert!(param.has_value("home"));
        assert!(param.has_value("HOME"));
        assert!(param.has_value("work"));
        assert!(!param.has_value("cell"));
    }
}
