//! Job application record types.
//!
//! [`JobRecord`] is the shape the jobs API returns; [`NewJobRecord`] is the
//! validated payload sent when creating one. Records are only ever created,
//! status-updated and deleted through the API, so the only field the client
//! mutates after creation is [`JobRecord::status`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::dates::{self, parse_record_date};
use crate::error::CoreError;
use crate::links::normalize_link;

/// Maximum length for company and role names (characters).
pub const MAX_TEXT_LENGTH: usize = 200;

/// Maximum length for a job posting link (characters).
pub const MAX_LINK_LENGTH: usize = 2048;

// `validator` length bounds are `u64`; mirror the limits above for the derive.
const MAX_TEXT_LENGTH_U64: u64 = MAX_TEXT_LENGTH as u64;
const MAX_LINK_LENGTH_U64: u64 = MAX_LINK_LENGTH as u64;

// ---------------------------------------------------------------------------
// JobId
// ---------------------------------------------------------------------------

/// Server-assigned identifier of a job record.
///
/// Opaque to the client: it is compared for equality and echoed back in
/// request paths, nothing else. Numeric ids are accepted on the wire and
/// kept in their decimal text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        let id = match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Number(n) => n.to_string(),
        };
        if id.trim().is_empty() {
            return Err(serde::de::Error::custom("job id must not be empty"));
        }
        Ok(Self(id))
    }
}

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl JobStatus {
    /// All statuses in display order.
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    /// Wire name, e.g. `"Interview"`.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = CoreError;

    /// Parse a status name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CoreError::invalid(
                    "status",
                    format!("'{s}' is not one of Applied, Interview, Offer, Rejected"),
                )
            })
    }
}

// ---------------------------------------------------------------------------
// JobRecord
// ---------------------------------------------------------------------------

/// A job application as confirmed by the jobs API.
///
/// Decodes from either the `_id` or the `id` key. When both are present
/// (Mongo documents serialized with virtuals) `_id` wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireJobRecord")]
pub struct JobRecord {
    pub id: JobId,
    pub company: String,
    pub role: String,
    pub status: JobStatus,
    /// Application date exactly as the API returned it. May be missing or
    /// unparseable on records written by other clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Deserialize)]
struct WireJobRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<JobId>,
    #[serde(default)]
    id: Option<JobId>,
    company: String,
    role: String,
    status: JobStatus,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

impl TryFrom<WireJobRecord> for JobRecord {
    type Error = &'static str;

    fn try_from(wire: WireJobRecord) -> Result<Self, Self::Error> {
        let id = wire
            .mongo_id
            .or(wire.id)
            .ok_or("job record has neither `_id` nor `id`")?;
        Ok(Self {
            id,
            company: wire.company,
            role: wire.role,
            status: wire.status,
            date: wire.date,
            link: wire.link,
        })
    }
}

impl JobRecord {
    /// Decode a record from an untyped JSON value.
    ///
    /// Fails if `id`, `company`, `role` or `status` are missing or have the
    /// wrong type, or if `status` is not a known value. Unknown extra
    /// fields are ignored.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        Self::deserialize(value).map_err(|e| CoreError::MalformedRecord(e.to_string()))
    }

    /// Calendar date of the application, if present and parseable.
    pub fn application_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_record_date)
    }

    /// Application date formatted for display, or `None` if unusable.
    pub fn display_date(&self) -> Option<String> {
        self.application_date().map(dates::format_display_date)
    }

    /// Posting link with a scheme, ready to open.
    pub fn link_url(&self) -> Option<String> {
        self.link.as_deref().and_then(normalize_link)
    }
}

// ---------------------------------------------------------------------------
// NewJobRecord
// ---------------------------------------------------------------------------

/// Validated payload for creating a job record.
///
/// Fields are private: the only way to obtain one is through
/// [`NewJobRecord::new`] or [`NewJobRecord::from_raw`], both of which
/// validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct NewJobRecord {
    #[validate(length(min = 1, max = MAX_TEXT_LENGTH_U64))]
    company: String,
    #[validate(length(min = 1, max = MAX_TEXT_LENGTH_U64))]
    role: String,
    status: JobStatus,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_LINK_LENGTH_U64))]
    link: Option<String>,
}

impl NewJobRecord {
    /// Build and validate a creation payload.
    ///
    /// Text fields are trimmed; a blank link is treated as absent.
    pub fn new(
        company: &str,
        role: &str,
        status: JobStatus,
        date: NaiveDate,
        link: Option<&str>,
    ) -> Result<Self, CoreError> {
        let record = Self {
            company: company.trim().to_string(),
            role: role.trim().to_string(),
            status,
            date,
            link: link
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        };
        record.validate().map_err(|errors| record.first_violation(&errors))?;
        Ok(record)
    }

    /// Build from raw form input.
    ///
    /// An empty `status` means [`JobStatus::Applied`]. `date` is required
    /// and must be `YYYY-MM-DD`.
    pub fn from_raw(
        company: &str,
        role: &str,
        status: &str,
        date: &str,
        link: &str,
    ) -> Result<Self, CoreError> {
        let status = if status.trim().is_empty() {
            JobStatus::default()
        } else {
            status.parse()?
        };
        let date = dates::parse_filter_date(date)?
            .ok_or_else(|| CoreError::invalid("date", "is required"))?;
        Self::new(company, role, status, date, Some(link))
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Map validator output to the first offending field, in form order.
    fn first_violation(&self, errors: &validator::ValidationErrors) -> CoreError {
        let failed = errors.field_errors();
        for (field, value, max) in [
            ("company", self.company.as_str(), MAX_TEXT_LENGTH),
            ("role", self.role.as_str(), MAX_TEXT_LENGTH),
            ("link", self.link.as_deref().unwrap_or_default(), MAX_LINK_LENGTH),
        ] {
            if failed.contains_key(field) {
                let reason = if value.is_empty() {
                    "must not be empty".to_string()
                } else {
                    format!("must be at most {max} characters")
                };
                return CoreError::invalid(field, reason);
            }
        }
        CoreError::MalformedRecord(errors.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
