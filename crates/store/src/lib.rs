//! Session state for the job application tracker.
//!
//! - [`RecordStore`] -- the local copy of every job record, changed only
//!   after the jobs API confirms a mutation.
//! - [`EventBus`] / [`StoreEvent`] -- change notifications so dependent
//!   views know when to re-run their filters.
//! - [`JobForm`] -- state of the "add job" form.

pub mod error;
pub mod events;
pub mod form;
pub mod store;

pub use error::StoreError;
pub use events::{EventBus, StoreEvent};
pub use form::JobForm;
pub use store::RecordStore;
