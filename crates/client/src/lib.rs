//! HTTP client for the job applications REST API.
//!
//! [`JobsBackend`] is the seam the record store talks to; [`JobsApi`] is
//! its `reqwest` implementation against the real service.

pub mod api;
pub mod backend;
pub mod config;

pub use api::{ApiError, JobsApi};
pub use backend::JobsBackend;
pub use config::ClientConfig;
