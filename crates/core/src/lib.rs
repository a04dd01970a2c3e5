//! Domain types and pure logic for the job application tracker.
//!
//! This crate has no network or runtime dependencies so it can be shared
//! by the API client, the record store and the command-line front end.

pub mod dates;
pub mod error;
pub mod filter;
pub mod job;
pub mod links;

pub use error::CoreError;
pub use filter::{FilterSpec, StatusFilter};
pub use job::{JobId, JobRecord, JobStatus, NewJobRecord};
