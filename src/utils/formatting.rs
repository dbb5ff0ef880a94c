//! Date formatting utilities
//!
//! Renders date/time values in one fixed locale (French) for display in
//! toasts and the form footer. Parsing is deliberately forgiving about the
//! input shape but strict about failure: an unrecognized input is an
//! explicit error, never a silently rendered placeholder.

use anyhow::{bail, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

/// French month names, indexed by `month0`
const MONTH_NAMES: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Formats a date/time string for display
///
/// Accepts RFC 3339 (`2026-01-12T14:05:00+01:00`), the same without an
/// offset, `YYYY-MM-DD HH:MM:SS`, and a bare `YYYY-MM-DD` (rendered as
/// midnight). The output locale is fixed: long French month name, numeric
/// day and year, 24-hour time, e.g. `12 janvier 2026 14:05`.
///
/// # Arguments
/// - `input` - The date/time string to parse
///
/// # Returns
/// The formatted display string
///
/// # Errors
/// Returns an error if the input matches none of the accepted shapes.
/// Callers must handle this rather than display a placeholder.
pub fn format_date(input: &str) -> Result<String> {
    let parsed = parse_datetime(input.trim())?;
    Ok(format_naive(parsed))
}

fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }
    bail!("unrecognized date format: '{}'", input)
}

fn format_naive(dt: NaiveDateTime) -> String {
    let month = MONTH_NAMES[dt.month0() as usize];
    format!(
        "{} {} {} {:02}:{:02}",
        dt.day(),
        month,
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}
