use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use crate::{Error, TimeWindow, DEFAULT_WINDOW_HOURS};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a caller supplied bound. Offsets are normalised to UTC, naive
/// values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, Error> {
    let value = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
        .ok_or_else(|| Error::InvalidTimestamp(raw.to_string()))
}

/// Missing bounds default to the trailing day ending at `now`.
pub fn resolve_window(
    after: Option<&str>,
    before: Option<&str>,
    now: DateTime<Utc>,
) -> Result<TimeWindow, Error> {
    let from = match after.filter(|s| !s.is_empty()) {
        Some(raw) => parse_timestamp(raw)?,
        None => now - Duration::hours(DEFAULT_WINDOW_HOURS),
    };
    let to = match before.filter(|s| !s.is_empty()) {
        Some(raw) => parse_timestamp(raw)?,
        None => now,
    };

    let window = TimeWindow { from, to };
    if from > to {
        return Err(Error::InvalidWindow {
            from: window.from_text(),
            to: window.to_text(),
        });
    }

    Ok(window)
}
