//! Scalar structured values carried by a contact.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub latitude: f32,
    pub longitude: f32,
}

impl Geo {
    #[must_use]
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns whether both coordinates are within their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Offset from UTC in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeZone {
    pub offset: i32,
}

impl TimeZone {
    #[must_use]
    pub const fn new(offset: i32) -> Self {
        Self { offset }
    }
}

/// Disclosure class of a record (vCard `CLASS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Secrecy {
    Public,
    Private,
    Confidential,
}

impl Secrecy {
    /// Returns the vCard spelling of this class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Confidential => "CONFIDENTIAL",
        }
    }
}

impl std::fmt::Display for Secrecy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar date with an optional time of day, interpreted as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactDate {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl ContactDate {
    /// Creates a date-only value.
    #[must_use]
    pub const fn date(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    /// Creates a date with a time of day.
    #[must_use]
    pub const fn date_time(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time: Some(time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_validity() {
        assert!(Geo::new(52.5, 13.4).is_valid());
        assert!(Geo::new(-90.0, 180.0).is_valid());
        assert!(!Geo::new(91.0, 0.0).is_valid());
        assert!(!Geo::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn secrecy_display() {
        assert_eq!(Secrecy::Confidential.to_string(), "CONFIDENTIAL");
        assert_eq!(Secrecy::Public.as_str(), "PUBLIC");
    }

    #[test]
    fn contact_date_constructors() {
        let day = NaiveDate::from_ymd_opt(1984, 2, 29).unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert_eq!(ContactDate::date(day).time, None);
        assert_eq!(ContactDate::date_time(day, noon).time, Some(noon));
    }
}
