//! Observer port — synchronous status-change notifications.

use haven_domain::alarm::AlarmStatus;

/// Receives notifications from the security service.
///
/// Observers are invoked synchronously, in unspecified order, before the
/// triggering operation returns. Implementations must not block for long —
/// anything slow belongs behind the event bus instead.
pub trait StatusObserver: Send + Sync {
    /// The alarm status changed to `status`.
    fn alarm_status_changed(&self, status: AlarmStatus);

    /// One or more sensors changed. No payload — re-query the service for
    /// details.
    fn sensor_status_changed(&self);

    /// The classifier reported whether the camera currently shows a cat.
    fn cat_detected(&self, detected: bool);
}
