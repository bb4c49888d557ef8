//! Date encoding used on the wire.
//!
//! Dates are emitted as ISO-8601. On input the decoder also accepts the wrapped
//! numeric form `/Date(<millis>[±hhmm])/` produced by older clients, where
//! `millis` counts milliseconds since the Unix epoch (UTC) and the optional
//! offset suffix is the sender's local offset. Calendar dates are read in that
//! offset, so a midnight sent from east of UTC keeps its day.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

const LEGACY_PREFIX: &str = "/Date(";
const LEGACY_SUFFIX: &str = ")/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireDateError {
    #[error("date value is empty")]
    Empty,
    #[error("malformed legacy date envelope: {0}")]
    MalformedEnvelope(String),
    #[error("timestamp out of range: {0}")]
    OutOfRange(i64),
    #[error("unrecognised date format: {0}")]
    Unrecognised(String),
}

/// Parse a timestamp in any accepted wire form.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, WireDateError> {
    parse_with_offset(value).map(|dt| dt.with_timezone(&Utc))
}

/// Parse a calendar date in any accepted wire form.
///
/// Timestamps are reduced to the date in the offset they were sent with.
pub fn parse_date(value: &str) -> Result<NaiveDate, WireDateError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_with_offset(trimmed).map(|dt| dt.date_naive())
}

/// Timestamps without an explicit offset are taken as UTC.
fn parse_with_offset(value: &str) -> Result<DateTime<FixedOffset>, WireDateError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(WireDateError::Empty);
    }
    let utc = Utc.fix();

    if value.starts_with(LEGACY_PREFIX) {
        let (millis, offset) = parse_legacy(value)?;
        let dt = DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or(WireDateError::OutOfRange(millis))?;
        return Ok(dt.with_timezone(&offset.unwrap_or(utc)));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc().with_timezone(&utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().with_timezone(&utc));
        }
    }

    Err(WireDateError::Unrecognised(value.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Render a timestamp in the legacy wrapped form.
pub fn format_legacy(dt: DateTime<Utc>) -> String {
    format!("{}{}{}", LEGACY_PREFIX, dt.timestamp_millis(), LEGACY_SUFFIX)
}

/// Split `/Date(millis±hhmm)/` into its millis and optional offset.
fn parse_legacy(value: &str) -> Result<(i64, Option<FixedOffset>), WireDateError> {
    let malformed = || WireDateError::MalformedEnvelope(value.to_string());
    let inner = value
        .strip_prefix(LEGACY_PREFIX)
        .and_then(|rest| rest.strip_suffix(LEGACY_SUFFIX))
        .ok_or_else(malformed)?;

    // The sign of the millis is part of the number; a later sign starts the offset.
    let offset_start = inner
        .char_indices()
        .skip(1)
        .find(|(_, c)| *c == '+' || *c == '-')
        .map(|(i, _)| i);

    let (millis, offset) = match offset_start {
        Some(i) => (&inner[..i], Some(&inner[i..])),
        None => (inner, None),
    };

    let offset = match offset {
        Some(raw) => {
            let digits = &raw[1..];
            if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(malformed());
            }
            let hours: i32 = digits[..2].parse().map_err(|_| malformed())?;
            let minutes: i32 = digits[2..].parse().map_err(|_| malformed())?;
            let seconds = (hours * 60 + minutes) * 60;
            let seconds = if raw.starts_with('-') { -seconds } else { seconds };
            Some(FixedOffset::east_opt(seconds).ok_or_else(malformed)?)
        }
        None => None,
    };

    let millis = millis.parse::<i64>().map_err(|_| malformed())?;
    Ok((millis, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    #[test]
    fn test_parse_legacy_envelope() {
        let dt = parse_datetime("/Date(1330560000000)/").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2012, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_legacy_envelope_with_offset() {
        let dt = parse_datetime("/Date(1330560000000+0100)/").unwrap();
        assert_eq!(dt.timestamp_millis(), 1_330_560_000_000);
    }

    #[test]
    fn test_legacy_offset_keeps_the_local_day() {
        // 1967-05-27 00:00 at +01:00 is still the 26th in UTC
        let date = parse_date("/Date(-82083600000+0100)/").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1967, 5, 27));

        let date = parse_date("/Date(1293001200000-0500)/").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2010, 12, 22).unwrap());

        let dt = parse_datetime("/Date(-82083600000+0100)/").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1967, 5, 26, 23, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_legacy_negative_millis() {
        // 1967-05-27 predates the epoch
        let date = parse_date("/Date(-82080000000)/").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1967, 5, 27));
    }

    #[test]
    fn test_malformed_envelopes_are_rejected() {
        assert!(matches!(
            parse_datetime("/Date(abc)/"),
            Err(WireDateError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            parse_datetime("/Date(123"),
            Err(WireDateError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            parse_datetime("/Date(123+01)/"),
            Err(WireDateError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_parse_iso_forms() {
        let expected = Utc.with_ymd_and_hms(2012, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(parse_datetime("2012-03-01T10:30:00Z").unwrap(), expected);
        assert_eq!(parse_datetime("2012-03-01T11:30:00+01:00").unwrap(), expected);
        assert_eq!(parse_datetime("2012-03-01T10:30:00").unwrap(), expected);
        assert_eq!(
            parse_date("2010-12-22").unwrap(),
            NaiveDate::from_ymd_opt(2010, 12, 22).unwrap()
        );
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(parse_datetime("  "), Err(WireDateError::Empty));
        assert!(matches!(
            parse_date("27th of May"),
            Err(WireDateError::Unrecognised(_))
        ));
    }

    #[test]
    fn test_legacy_format_matches_parser() {
        let dt = Utc.with_ymd_and_hms(1985, 7, 23, 0, 0, 0).unwrap();
        let encoded = format_legacy(dt);
        assert!(encoded.starts_with("/Date("));
        assert_eq!(parse_datetime(&encoded).unwrap(), dt);
    }
}
