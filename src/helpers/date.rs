//! Date helper functions
//!
//! Post dates are opaque text: sources disagree on format and sometimes send
//! nothing at all. Parsing happens only where an actual ordering or display
//! is needed; a date that fails to parse is never an error.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Parse a date string in the formats the sources are known to produce
///
/// Returns `None` for anything unrecognized.
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
    }

    // Date-only shapes, including the M/D/YY style the mock table uses
    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y"];

    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
    }

    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}

/// Sort key for recency ordering
///
/// Missing and unparsable dates sort as the oldest possible value.
pub fn timestamp_or_earliest(date: Option<&str>) -> i64 {
    date.and_then(parse_date_string)
        .map(|dt| dt.timestamp())
        .unwrap_or(i64::MIN)
}

/// Format a date for display, falling back to the verbatim text
pub fn display_date(date: Option<&str>, format: &str) -> String {
    match date {
        Some(text) => match parse_date_string(text) {
            Some(dt) => dt.format(format).to_string(),
            None => text.to_string(),
        },
        None => String::new(),
    }
}
