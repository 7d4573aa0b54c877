//! Arming status — whether the system is disarmed or armed, and in which mode.

use serde::{Deserialize, Serialize};

/// Arming mode of the security system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmingStatus {
    /// Sensor triggers are ignored.
    #[default]
    Disarmed,
    /// Armed while occupants are home; cat detection can trip the alarm.
    ArmedHome,
    /// Armed with nobody home.
    ArmedAway,
}

impl ArmingStatus {
    /// Whether the system is armed in any mode.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        !matches!(self, Self::Disarmed)
    }
}

impl std::fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disarmed => f.write_str("disarmed"),
            Self::ArmedHome => f.write_str("armed_home"),
            Self::ArmedAway => f.write_str("armed_away"),
        }
    }
}
