//! Filter engine for the job list view.
//!
//! Pure functions from a record collection and a [`FilterSpec`] to the
//! visible subset. Nothing here is cached; callers re-run [`apply`] on
//! every change to either input.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::dates::parse_filter_date;
use crate::error::CoreError;
use crate::job::{JobRecord, JobStatus};

/// Filter keyword matching every status.
pub const STATUS_ALL: &str = "all";

/// Status selector of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(STATUS_ALL),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    /// `"all"` (any case) or a status name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(STATUS_ALL) {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// The pair of list filters: status selector and optional day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub status: StatusFilter,
    pub date: Option<NaiveDate>,
}

impl FilterSpec {
    /// Build a spec from the raw values of the filter controls.
    ///
    /// An empty date means no date filter.
    pub fn parse(status: &str, date: &str) -> Result<Self, CoreError> {
        Ok(Self {
            status: status.parse()?,
            date: parse_filter_date(date)?,
        })
    }

    /// `true` if this spec lets every record through.
    pub fn is_unfiltered(&self) -> bool {
        self.status == StatusFilter::All && self.date.is_none()
    }
}

/// Status half of the predicate.
pub fn matches_status(record: &JobRecord, spec: &FilterSpec) -> bool {
    match spec.status {
        StatusFilter::All => true,
        StatusFilter::Only(status) => record.status == status,
    }
}

/// Date half of the predicate.
///
/// With no date in the spec every record matches. Otherwise the record
/// must carry a parseable date whose calendar day equals the spec's.
pub fn matches_date(record: &JobRecord, spec: &FilterSpec) -> bool {
    match spec.date {
        None => true,
        Some(day) => record.application_date() == Some(day),
    }
}

/// Full predicate: both halves must match.
pub fn matches(record: &JobRecord, spec: &FilterSpec) -> bool {
    matches_status(record, spec) && matches_date(record, spec)
}

/// Compute the visible subset of `records`, preserving order.
///
/// `None` stands for "no well-formed collection" (e.g. the initial load
/// never succeeded) and always yields an empty result.
pub fn apply<'a>(records: Option<&'a [JobRecord]>, spec: &FilterSpec) -> Vec<&'a JobRecord> {
    records
        .unwrap_or_default()
        .iter()
        .filter(|record| matches(record, spec))
        .collect()
}

/// Filter an untyped API payload.
///
/// Anything other than a JSON array yields an empty result. Array
/// elements that do not decode as a [`JobRecord`] are skipped.
pub fn apply_json(payload: &serde_json::Value, spec: &FilterSpec) -> Vec<JobRecord> {
    let Some(items) = payload.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| JobRecord::from_json(item).ok())
        .filter(|record| matches(record, spec))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
