//! In-memory [`JobsBackend`] standing in for the jobs API.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use jobtrack_client::{ApiError, JobsBackend};
use jobtrack_core::{JobId, JobRecord, JobStatus, NewJobRecord};

/// Which backend method was invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(String),
    UpdateStatus(JobId, JobStatus),
    Delete(JobId),
}

#[derive(Default)]
struct FakeState {
    records: Vec<JobRecord>,
    next_id: u64,
    fail: bool,
    misroute_updates_to: Option<JobId>,
    calls: Vec<Call>,
}

/// Server-side state plus a switch that makes every call fail with `503`.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub fn with_records(records: Vec<JobRecord>) -> Self {
        let backend = Self::default();
        backend.state.lock().unwrap().records = records;
        backend
    }

    pub fn set_failing(&self, fail: bool) {
        self.state.lock().unwrap().fail = fail;
    }

    /// Make status updates change and return the record `id` instead of
    /// the requested one.
    pub fn misroute_updates_to(&self, id: &str) {
        self.state.lock().unwrap().misroute_updates_to = Some(JobId::from(id));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn server_records(&self) -> Vec<JobRecord> {
        self.state.lock().unwrap().records.clone()
    }

    /// Change a record on the "server" without the client knowing.
    pub fn edit(&self, id: &str, edit: impl FnOnce(&mut JobRecord)) {
        let mut state = self.state.lock().unwrap();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id.as_str() == id)
            .expect("record to edit");
        edit(record);
    }

    fn begin(&self, call: Call) -> Result<std::sync::MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.fail {
            return Err(ApiError::Status {
                status: 503,
                body: "simulated failure".into(),
            });
        }
        Ok(state)
    }
}

fn not_found(id: &JobId) -> ApiError {
    ApiError::Status {
        status: 404,
        body: format!("Job {id} not found"),
    }
}

#[async_trait]
impl JobsBackend for FakeBackend {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError> {
        let state = self.begin(Call::List)?;
        Ok(state.records.clone())
    }

    async fn create_job(&self, input: &NewJobRecord) -> Result<JobRecord, ApiError> {
        let mut state = self.begin(Call::Create(input.company().to_string()))?;
        state.next_id += 1;
        let record = JobRecord {
            id: JobId::new(format!("srv-{}", state.next_id)),
            company: input.company().to_string(),
            role: input.role().to_string(),
            status: input.status(),
            date: Some(input.date().format("%Y-%m-%dT00:00:00.000Z").to_string()),
            link: input.link().map(str::to_string),
        };
        state.records.push(record.clone());
        Ok(record)
    }

    async fn update_status(&self, id: &JobId, status: JobStatus) -> Result<JobRecord, ApiError> {
        let mut state = self.begin(Call::UpdateStatus(id.clone(), status))?;
        let target = state.misroute_updates_to.clone().unwrap_or_else(|| id.clone());
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == target)
            .ok_or_else(|| not_found(&target))?;
        record.status = status;
        Ok(record.clone())
    }

    async fn delete_job(&self, id: &JobId) -> Result<(), ApiError> {
        let mut state = self.begin(Call::Delete(id.clone()))?;
        let before = state.records.len();
        state.records.retain(|r| &r.id != id);
        if state.records.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

pub fn record(id: &str, company: &str, status: JobStatus, date: Option<&str>) -> JobRecord {
    JobRecord {
        id: JobId::from(id),
        company: company.to_string(),
        role: "Engineer".to_string(),
        status,
        date: date.map(str::to_string),
        link: None,
    }
}
