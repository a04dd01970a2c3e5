//! REST client for the jobs API.
//!
//! Wraps the four endpoints (list, create, update status, delete) using
//! [`reqwest`]. Responses are decoded into [`JobRecord`]s at this boundary;
//! anything that does not have that shape is reported as
//! [`ApiError::MalformedResponse`] rather than passed through.

use async_trait::async_trait;
use jobtrack_core::{JobId, JobRecord, JobStatus, NewJobRecord};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::backend::JobsBackend;
use crate::config::ClientConfig;

/// HTTP client for one jobs API deployment.
#[derive(Debug, Clone)]
pub struct JobsApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the jobs API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Jobs API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("Malformed response from jobs API: {0}")]
    MalformedResponse(String),

    /// The configured base URL cannot carry a record id as a path segment.
    #[error("Invalid jobs API URL: {0}")]
    InvalidUrl(String),
}

/// Body of `PATCH /{id}`.
#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: JobStatus,
}

impl JobsApi {
    /// Create a client for the jobs collection at `base_url`,
    /// e.g. `https://host/api/jobs`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        Self {
            client,
            base_url: ClientConfig::new(base_url).api_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.api_url)
    }

    /// Base URL of the jobs collection (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every job record.
    ///
    /// A body that is not a JSON array is an error. Individual elements
    /// that do not decode as a record are dropped with a warning so one bad
    /// row does not hide the rest.
    pub async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError> {
        let response = self
            .client
            .get(self.collection_url())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let payload: serde_json::Value = Self::parse_response(response).await?;
        let serde_json::Value::Array(items) = payload else {
            return Err(ApiError::MalformedResponse(
                "expected a JSON array of job records".into(),
            ));
        };

        let total = items.len();
        let records: Vec<JobRecord> = items
            .iter()
            .filter_map(|item| match JobRecord::from_json(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed job record");
                    None
                }
            })
            .collect();

        tracing::debug!(total, kept = records.len(), "Fetched job records");
        Ok(records)
    }

    /// Create a job record. Returns the record with its assigned id.
    pub async fn create_job(&self, input: &NewJobRecord) -> Result<JobRecord, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;

        Self::parse_record(response).await
    }

    /// Change the status of a job record. Returns the updated record.
    pub async fn update_status(
        &self,
        id: &JobId,
        status: JobStatus,
    ) -> Result<JobRecord, ApiError> {
        let response = self
            .client
            .patch(self.item_url(id)?)
            .json(&StatusUpdate { status })
            .send()
            .await?;

        Self::parse_record(response).await
    }

    /// Delete a job record.
    pub async fn delete_job(&self, id: &JobId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.item_url(id)?)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// `{base}/{id}` with `id` percent-encoded as a single path segment.
    fn item_url(&self, id: &JobId) -> Result<reqwest::Url, ApiError> {
        let invalid = || ApiError::InvalidUrl(self.base_url.clone());
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Read a successful response body as JSON.
    async fn parse_response(response: reqwest::Response) -> Result<serde_json::Value, ApiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Read a successful response body as a single job record.
    async fn parse_record(response: reqwest::Response) -> Result<JobRecord, ApiError> {
        let payload = Self::parse_response(response).await?;
        JobRecord::from_json(&payload).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl JobsBackend for JobsApi {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError> {
        JobsApi::list_jobs(self).await
    }

    async fn create_job(&self, input: &NewJobRecord) -> Result<JobRecord, ApiError> {
        JobsApi::create_job(self, input).await
    }

    async fn update_status(&self, id: &JobId, status: JobStatus) -> Result<JobRecord, ApiError> {
        JobsApi::update_status(self, id, status).await
    }

    async fn delete_job(&self, id: &JobId) -> Result<(), ApiError> {
        JobsApi::delete_job(self, id).await
    }
}
