//! Event — an immutable record of a status change.
//!
//! Events are produced by the event bus bridge when the security service
//! notifies its observers; async consumers subscribe to the bus instead of
//! implementing the observer trait directly.

use serde::{Deserialize, Serialize};

use crate::alarm::AlarmStatus;
use crate::id::EventId;
use crate::time::{Timestamp, now};

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SecurityEvent {
    /// The alarm status changed to the given value.
    AlarmStatusChanged { status: AlarmStatus },
    /// One or more sensors changed; subscribers re-query for details.
    SensorStatusChanged,
    /// The classifier reported whether the camera shows a cat.
    CatDetected { detected: bool },
}

/// A timestamped, identified status-change record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub payload: SecurityEvent,
    pub recorded_at: Timestamp,
}

impl Event {
    /// Create a new event stamped with the current time.
    #[must_use]
    pub fn new(payload: SecurityEvent) -> Self {
        Self {
            id: EventId::new(),
            payload,
            recorded_at: now(),
        }
    }
}
