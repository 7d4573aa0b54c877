//! Sensor — a binary device record (active/inactive) tracked by the system.
//!
//! Sensor records are owned by the state store. The security service works
//! on copies and commits mutations back through the store's `update_sensor`
//! call; it never holds the authoritative record.

use serde::{Deserialize, Serialize};

use crate::error::{HavenError, ValidationError};
use crate::id::SensorId;

/// The physical category of a sensor.
///
/// The category does not influence transition logic; it only labels the
/// device for presentation and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Door,
    Window,
    Motion,
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Door => f.write_str("door"),
            Self::Window => f.write_str("window"),
            Self::Motion => f.write_str("motion"),
        }
    }
}

/// A binary sensor tracked by the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    pub name: String,
    pub kind: SensorKind,
    pub active: bool,
}

impl Sensor {
    /// Create a builder for constructing a [`Sensor`].
    #[must_use]
    pub fn builder() -> SensorBuilder {
        SensorBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HavenError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HavenError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Sensor`].
///
/// New sensors start inactive unless [`active`](SensorBuilder::active)
/// is called.
#[derive(Debug, Default)]
pub struct SensorBuilder {
    id: Option<SensorId>,
    name: Option<String>,
    kind: Option<SensorKind>,
    active: bool,
}

impl SensorBuilder {
    #[must_use]
    pub fn id(mut self, id: SensorId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: SensorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Consume the builder, validate, and return a [`Sensor`].
    ///
    /// # Errors
    ///
    /// Returns [`HavenError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Sensor, HavenError> {
        let sensor = Sensor {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or(SensorKind::Door),
            active: self.active,
        };
        sensor.validate()?;
        Ok(sensor)
    }
}
