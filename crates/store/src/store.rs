//! The record store: the session's local copy of every job record.
//!
//! Every mutating operation is one backend round-trip followed, only on
//! success, by one local update. Nothing is applied optimistically, so
//! after each successful call the collection holds exactly what the API
//! last confirmed for the affected record.
//!
//! The local half of each operation is also exposed on its own
//! (`apply_*`). A front end that fires requests concurrently can feed the
//! responses back in arrival order; the last response applied wins.

use std::collections::HashSet;

use jobtrack_client::{ApiError, JobsBackend};
use jobtrack_core::{filter, FilterSpec, JobId, JobRecord, JobStatus, NewJobRecord};
use tokio::sync::broadcast;

use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};

/// Owns the local job collection and mediates every change through a
/// [`JobsBackend`].
pub struct RecordStore<B> {
    backend: B,
    /// `None` until the first successful load (or create).
    records: Option<Vec<JobRecord>>,
    events: EventBus,
}

impl<B: JobsBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            records: None,
            events: EventBus::default(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current collection, or `None` if nothing has been loaded yet.
    pub fn records(&self) -> Option<&[JobRecord]> {
        self.records.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    pub fn get(&self, id: &JobId) -> Option<&JobRecord> {
        self.snapshot().iter().find(|r| &r.id == id)
    }

    /// Records passing `spec`, recomputed from the current collection.
    pub fn visible(&self, spec: &FilterSpec) -> Vec<&JobRecord> {
        filter::apply(self.records(), spec)
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // ---- operations ----

    /// Replace the local collection with the API's.
    pub async fn load(&mut self) -> Result<&[JobRecord], StoreError> {
        let records = self.backend.list_jobs().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to load job applications");
        })?;
        self.apply_loaded(records);
        Ok(self.snapshot())
    }

    /// Create a record and append the API's version of it.
    ///
    /// On success the created record is the last element of the returned
    /// collection.
    pub async fn create(&mut self, input: NewJobRecord) -> Result<&[JobRecord], StoreError> {
        let record = self.backend.create_job(&input).await.inspect_err(|e| {
            tracing::warn!(error = %e, company = %input.company(), "Failed to add job application");
        })?;
        self.apply_created(record);
        Ok(self.snapshot())
    }

    /// Change a record's status and adopt the API's returned version.
    ///
    /// The request is sent even if `id` is not in the local collection; in
    /// that case a successful response leaves the collection as it was.
    /// A response for a different id fails with
    /// [`ApiError::MalformedResponse`] and changes nothing locally.
    pub async fn set_status(
        &mut self,
        id: &JobId,
        status: JobStatus,
    ) -> Result<&[JobRecord], StoreError> {
        let record = self
            .backend
            .update_status(id, status)
            .await
            .inspect_err(|e| {
                tracing::warn!(error = %e, %id, %status, "Failed to update job status");
            })?;
        if &record.id != id {
            tracing::warn!(requested = %id, returned = %record.id, "Status update returned a different record");
            return Err(ApiError::MalformedResponse(format!(
                "status update for {id} returned record {}",
                record.id
            ))
            .into());
        }
        self.apply_updated(record);
        Ok(self.snapshot())
    }

    /// Delete a record and drop it from the local collection.
    pub async fn remove(&mut self, id: &JobId) -> Result<&[JobRecord], StoreError> {
        self.backend.delete_job(id).await.inspect_err(|e| {
            tracing::warn!(error = %e, %id, "Failed to delete job application");
        })?;
        self.apply_removed(id);
        Ok(self.snapshot())
    }

    // ---- local reconciliation ----

    /// Replace the collection with a freshly fetched one.
    ///
    /// Keeps the API's order. Should the API repeat an id, only its first
    /// occurrence is kept.
    pub fn apply_loaded(&mut self, records: Vec<JobRecord>) {
        let total = records.len();
        let mut seen = HashSet::with_capacity(total);
        let records: Vec<JobRecord> = records
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect();
        if records.len() != total {
            tracing::warn!(
                total,
                kept = records.len(),
                "Dropped job records with duplicate ids"
            );
        }

        let count = records.len();
        self.records = Some(records);
        tracing::info!(count, "Loaded job applications");
        self.events.publish(StoreEvent::Loaded { count });
    }

    /// Append a record confirmed by the API.
    ///
    /// A stale local copy with the same id is dropped first, so the id
    /// stays unique and the new record is always last.
    pub fn apply_created(&mut self, record: JobRecord) {
        let id = record.id.clone();
        let records = self.records.get_or_insert_with(Vec::new);
        records.retain(|r| r.id != id);
        records.push(record);
        tracing::info!(%id, "Added job application");
        self.events.publish(StoreEvent::Created { id });
    }

    /// Replace the local record sharing `record`'s id.
    ///
    /// Returns `false` (and changes nothing) if no such record is held.
    pub fn apply_updated(&mut self, record: JobRecord) -> bool {
        let Some(slot) = self
            .records
            .as_mut()
            .and_then(|records| records.iter_mut().find(|r| r.id == record.id))
        else {
            tracing::debug!(id = %record.id, "Updated job application is not held locally");
            return false;
        };

        let id = record.id.clone();
        let status = record.status;
        *slot = record;
        tracing::info!(%id, %status, "Updated job status");
        self.events.publish(StoreEvent::StatusChanged { id, status });
        true
    }

    /// Drop the record with `id`. Returns `false` if it was not held.
    pub fn apply_removed(&mut self, id: &JobId) -> bool {
        let Some(records) = self.records.as_mut() else {
            return false;
        };
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            tracing::debug!(%id, "Deleted job application is not held locally");
            return false;
        }

        tracing::info!(%id, "Deleted job application");
        self.events.publish(StoreEvent::Removed { id: id.clone() });
        true
    }

    fn snapshot(&self) -> &[JobRecord] {
        self.records.as_deref().unwrap_or_default()
    }
}
