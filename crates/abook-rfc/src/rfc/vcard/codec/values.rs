//! Typed scalar values: date-time, UTC offset, geo position and class.

use abook_core::model::{ContactDate, Geo, Secrecy};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Formats a date as `yyyy-mm-dd`, with `Thh:mm:ssZ` appended when a time is set.
#[must_use]
pub fn format_date_time(value: &ContactDate) -> String {
    let date = value.date.format("%Y-%m-%d");
    match value.time {
        Some(time) => format!("{date}T{}Z", time.format("%H:%M:%S")),
        None => date.to_string(),
    }
}

/// Parses a date or date-time in basic (`19960415T083000`) or extended
/// (`1996-04-15T08:30:00Z`) form.
///
/// Fractional seconds are dropped. A numeric UTC offset is applied so the
/// result is in UTC.
#[must_use]
pub fn parse_date_time(text: &str) -> Option<ContactDate> {
    let text = text.trim();
    let (date_part, time_part) = match text.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (text, None),
    };

    let date = if date_part.contains('-') {
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?
    } else {
        NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?
    };

    let Some(time_part) = time_part else {
        return Some(ContactDate::date(date));
    };

    let (clock, offset) = split_time_zone(time_part)?;
    let clock = clock.split(['.', ',']).next().unwrap_or(clock);
    let time = parse_clock(clock)?;

    let utc: NaiveDateTime = date
        .and_time(time)
        .checked_sub_signed(TimeDelta::try_minutes(i64::from(offset))?)?;
    Some(ContactDate::date_time(utc.date(), utc.time()))
}

/// Splits a time into the clock part and the offset in minutes.
fn split_time_zone(time: &str) -> Option<(&str, i32)> {
    if let Some(clock) = time.strip_suffix(['Z', 'z']) {
        return Some((clock, 0));
    }
    match time.find(['+', '-']) {
        Some(pos) => Some((&time[..pos], parse_utc_offset(&time[pos..])?)),
        None => Some((time, 0)),
    }
}

fn parse_clock(clock: &str) -> Option<NaiveTime> {
    let formats: &[&str] = if clock.contains(':') {
        &["%H:%M:%S", "%H:%M"]
    } else {
        &["%H%M%S", "%H%M"]
    };
    formats
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(clock, f).ok())
}

/// Formats an offset in minutes as `±hh:mm`.
#[must_use]
pub fn format_utc_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// Parses `±hh:mm`, `±hhmm`, `±hh` or `Z` into minutes.
#[must_use]
pub fn parse_utc_offset(s: &str) -> Option<i32> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("Z") {
        return Some(0);
    }

    let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (-1, rest)
    } else {
        return None;
    };

    let (hours, minutes) = if let Some((h, m)) = rest.split_once(':') {
        (h, m)
    } else if rest.len() == 4 {
        rest.split_at_checked(2)?
    } else if rest.len() == 2 {
        (rest, "0")
    } else {
        return None;
    };

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if !(0..60).contains(&minutes) || !(0..24).contains(&hours) {
        return None;
    }

    Some(sign * (hours * 60 + minutes))
}

/// Formats a position as `lat;long` with six decimals.
#[must_use]
pub fn format_geo(geo: &Geo) -> String {
    format!("{:.6};{:.6}", geo.latitude, geo.longitude)
}

/// Parses `lat;long` (or `lat,long`).
#[must_use]
pub fn parse_geo(text: &str) -> Option<Geo> {
    let (lat, long) = text.split_once(';').or_else(|| text.split_once(','))?;
    Some(Geo::new(lat.trim().parse().ok()?, long.trim().parse().ok()?))
}

#[must_use]
pub const fn format_class(secrecy: Secrecy) -> &'static str {
    secrecy.as_str()
}

/// Parses a `CLASS` value (case-insensitive).
#[must_use]
pub fn parse_class(text: &str) -> Option<Secrecy> {
    match text.trim().to_ascii_uppercase().as_str() {
        "PUBLIC" => Some(Secrecy::Public),
        "PRIVATE" => Some(Secrecy::Private),
        "CONFIDENTIAL" => Some(Secrecy::Confidential),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_only() {
        let parsed = parse_date_time("1987-03-21").unwrap();
        assert_eq!(parsed, ContactDate::date(day(1987, 3, 21)));
        assert_eq!(parse_date_time("19870321"), Some(parsed));
        assert_eq!(format_date_time(&parsed), "1987-03-21");
    }

    #[test]
    fn extended_date_time() {
        let parsed = parse_date_time("2004-02-29T13:45:07Z").unwrap();
        assert_eq!(parsed.date, day(2004, 2, 29));
        assert_eq!(parsed.time, NaiveTime::from_hms_opt(13, 45, 7));
        assert_eq!(format_date_time(&parsed), "2004-02-29T13:45:07Z");
    }

    #[test]
    fn basic_date_time_with_fraction() {
        let parsed = parse_date_time("20040229T134507.25Z").unwrap();
        assert_eq!(parsed.time, NaiveTime::from_hms_opt(13, 45, 7));
    }

    #[test]
    fn offset_is_applied() {
        let parsed = parse_date_time("2004-03-01T01:30:00+02:00").unwrap();
        assert_eq!(parsed.date, day(2004, 2, 29));
        assert_eq!(parsed.time, NaiveTime::from_hms_opt(23, 30, 0));
    }

    #[test]
    fn offset_past_date_range_is_rejected() {
        let latest = format!("{}T23:59:59-01:00", NaiveDate::MAX.format("%Y-%m-%d"));
        assert_eq!(parse_date_time(&latest), None);
        assert_eq!(parse_date_time("+262142-12-31T23:59:59-01:00"), None);

        let earliest = format!("{}T00:00:00+01:00", NaiveDate::MIN.format("%Y-%m-%d"));
        assert_eq!(parse_date_time(&earliest), None);

        let in_range = format!("{}T22:00:00-01:00", NaiveDate::MAX.format("%Y-%m-%d"));
        assert_eq!(
            parse_date_time(&in_range).and_then(|d| d.time),
            NaiveTime::from_hms_opt(23, 0, 0)
        );
    }

    #[test]
    fn invalid_dates() {
        assert_eq!(parse_date_time(""), None);
        assert_eq!(parse_date_time("2004-13-01"), None);
        assert_eq!(parse_date_time("2004-01-01T25:00:00Z"), None);
    }

    #[test]
    fn utc_offset_forms() {
        assert_eq!(parse_utc_offset("+05:30"), Some(330));
        assert_eq!(parse_utc_offset("-0800"), Some(-480));
        assert_eq!(parse_utc_offset("+01"), Some(60));
        assert_eq!(parse_utc_offset("Z"), Some(0));
        assert_eq!(parse_utc_offset("05:00"), None);
        assert_eq!(parse_utc_offset("+5:75"), None);
    }

    #[test]
    fn utc_offset_format() {
        assert_eq!(format_utc_offset(330), "+05:30");
        assert_eq!(format_utc_offset(-480), "-08:00");
        assert_eq!(format_utc_offset(0), "+00:00");
        assert_eq!(parse_utc_offset(&format_utc_offset(-45)), Some(-45));
    }

    #[test]
    fn geo_forms() {
        let geo = parse_geo("37.386013;-122.082932").unwrap();
        assert!((geo.latitude - 37.386_013).abs() < 1e-5);
        assert!((geo.longitude + 122.082_932).abs() < 1e-5);
        assert_eq!(parse_geo("1.5,2.5"), Some(Geo::new(1.5, 2.5)));
        assert_eq!(parse_geo("garbage"), None);
        assert_eq!(format_geo(&Geo::new(1.5, -2.25)), "1.500000;-2.250000");
    }

    #[test]
    fn class_values() {
        assert_eq!(parse_class("confidential"), Some(Secrecy::Confidential));
        assert_eq!(parse_class(" PUBLIC "), Some(Secrecy::Public));
        assert_eq!(parse_class("secret"), None);
        assert_eq!(format_class(Secrecy::Private), "PRIVATE");
    }
}
