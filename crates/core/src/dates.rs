//! Calendar date parsing and display helpers.
//!
//! The jobs API hands dates back in whatever shape its datastore produced
//! (plain `YYYY-MM-DD`, or a full timestamp at midnight UTC). Filtering and
//! display only ever care about the calendar date as written, so every
//! parser here returns the date component without shifting it into
//! another timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::CoreError;

/// Wire and form format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Naive timestamp format (no offset), fractional seconds optional.
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Display format, e.g. `Jan 10, 2024`.
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Parse a date as stored on a job record.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive ISO timestamps.
/// Returns `None` for empty or unparseable input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use jobtrack_core::dates::parse_record_date;
///
/// let jan10 = NaiveDate::from_ymd_opt(2024, 1, 10);
/// assert_eq!(parse_record_date("2024-01-10"), jan10);
/// assert_eq!(parse_record_date("2024-01-10T00:00:00.000Z"), jan10);
/// assert_eq!(parse_record_date("not a date"), None);
/// ```
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    // The offset is ignored on purpose: `2024-01-10T23:30:00-05:00` is the
    // 10th to whoever entered it, not the 11th.
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, NAIVE_TIMESTAMP_FORMAT)
        .ok()
        .map(|ts| ts.date())
}

/// Parse the date input of a filter control.
///
/// An empty (or whitespace-only) value means "no date filter".
pub fn parse_filter_date(raw: &str) -> Result<Option<NaiveDate>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| CoreError::invalid("date", format!("'{raw}' is not a YYYY-MM-DD date")))
}

/// Format a calendar date for display, e.g. `Jan 10, 2024`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
