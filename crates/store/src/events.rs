//! In-process change notifications backed by a `tokio::sync::broadcast`
//! channel.
//!
//! The [`RecordStore`](crate::RecordStore) publishes one [`StoreEvent`]
//! after every successful operation. Views subscribe to learn when to
//! recompute what they show.

use jobtrack_core::{JobId, JobStatus};
use serde::Serialize;
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// StoreEvent
// ---------------------------------------------------------------------------

/// A confirmed change to the local record collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// The collection was replaced by a fresh fetch.
    Loaded { count: usize },
    /// A record was created and appended.
    Created { id: JobId },
    /// A record's status changed on the server.
    StatusChanged { id: JobId, status: JobStatus },
    /// A record was deleted.
    Removed { id: JobId },
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Fan-out bus for [`StoreEvent`]s.
///
/// Any number of subscribers independently receive every published event.
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed events are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: StoreEvent) {
        // A send error only means nobody is listening.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
