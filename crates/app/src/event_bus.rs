//! In-process event bus backed by a tokio broadcast channel.
//!
//! The bus implements [`StatusObserver`], so it can be registered with the
//! security service directly; each observer callback becomes an [`Event`]
//! on the channel for async subscribers.

use tokio::sync::broadcast;

use haven_domain::alarm::AlarmStatus;
use haven_domain::event::{Event, SecurityEvent};

use crate::ports::StatusObserver;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    fn publish(&self, payload: SecurityEvent) {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(Event::new(payload));
    }
}

impl StatusObserver for InProcessEventBus {
    fn alarm_status_changed(&self, status: AlarmStatus) {
        self.publish(SecurityEvent::AlarmStatusChanged { status });
    }

    fn sensor_status_changed(&self) {
        self.publish(SecurityEvent::SensorStatusChanged);
    }

    fn cat_detected(&self, detected: bool) {
        self.publish(SecurityEvent::CatDetected { detected });
    }
}
