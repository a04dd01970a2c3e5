//! The external jobs API as seen by the record store.

use async_trait::async_trait;
use jobtrack_core::{JobId, JobRecord, JobStatus, NewJobRecord};

use crate::api::ApiError;

/// One method per API operation. Each call is a single round-trip with no
/// retries; implementations never touch local state.
#[async_trait]
pub trait JobsBackend: Send + Sync {
    /// `GET /` -- every record, in the order the API returns them.
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError>;

    /// `POST /` -- create a record; returns it with its assigned id.
    async fn create_job(&self, input: &NewJobRecord) -> Result<JobRecord, ApiError>;

    /// `PATCH /{id}` -- change the status; returns the updated record.
    async fn update_status(&self, id: &JobId, status: JobStatus) -> Result<JobRecord, ApiError>;

    /// `DELETE /{id}` -- the response body is not consumed.
    async fn delete_job(&self, id: &JobId) -> Result<(), ApiError>;
}
