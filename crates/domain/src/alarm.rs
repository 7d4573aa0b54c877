//! Alarm status — the three-level escalation state of the alarm itself.

use serde::{Deserialize, Serialize};

/// Escalation state of the alarm.
///
/// There is no structural ordering between the levels; every transition is
/// decided explicitly by the security service per incoming event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmStatus {
    /// The system is quiet.
    #[default]
    NoAlarm,
    /// A sensor has tripped; the alarm will escalate unless cleared.
    PendingAlarm,
    /// The alarm is sounding.
    Alarm,
}

impl AlarmStatus {
    /// Whether the alarm is fully triggered.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        matches!(self, Self::Alarm)
    }
}

impl std::fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAlarm => f.write_str("no_alarm"),
            Self::PendingAlarm => f.write_str("pending_alarm"),
            Self::Alarm => f.write_str("alarm"),
        }
    }
}
