//! State of the "add job" form.
//!
//! Submitting validates the raw input, then creates the record through the
//! [`RecordStore`]. The form keeps everything the user typed when either
//! step fails so they can correct or retry, and resets once the API has
//! confirmed the new record.

use jobtrack_client::JobsBackend;
use jobtrack_core::{CoreError, JobRecord, JobStatus, NewJobRecord};

use crate::error::StoreError;
use crate::store::RecordStore;

/// Raw field values of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub company: String,
    pub role: String,
    pub status: JobStatus,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub date: String,
    pub link: String,
}

impl JobForm {
    /// Validate the current input into a creation payload.
    pub fn to_new_record(&self) -> Result<NewJobRecord, CoreError> {
        NewJobRecord::from_raw(
            &self.company,
            &self.role,
            self.status.as_str(),
            &self.date,
            &self.link,
        )
    }

    /// Reset every field to its initial value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Submit the form.
    ///
    /// Invalid input fails with [`StoreError::Validation`] and no request
    /// is sent. On success the form is cleared and the updated collection
    /// is returned, with the new record last.
    pub async fn submit<'s, B: JobsBackend>(
        &mut self,
        store: &'s mut RecordStore<B>,
    ) -> Result<&'s [JobRecord], StoreError> {
        let input = self.to_new_record().inspect_err(|e| {
            tracing::debug!(error = %e, "Job form rejected");
        })?;
        let records = store.create(input).await?;
        self.clear();
        Ok(records)
    }
}
