//! State store port — persistence for statuses and the sensor set.
//!
//! The store is the sole owner of sensor records and the two statuses.
//! The security service reads through the store on every operation and
//! commits sensor mutations back via [`update_sensor`](StateStore::update_sensor);
//! it never caches state across operations.

use std::future::Future;

use haven_domain::alarm::AlarmStatus;
use haven_domain::arming::ArmingStatus;
use haven_domain::error::HavenError;
use haven_domain::id::SensorId;
use haven_domain::sensor::Sensor;

/// Persistence for the system's alarm status, arming status, and sensors.
///
/// No transactional guarantee is assumed beyond each call completing before
/// the caller proceeds.
pub trait StateStore {
    /// Current alarm status.
    fn get_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, HavenError>> + Send;

    /// Persist a new alarm status.
    fn set_alarm_status(
        &self,
        status: AlarmStatus,
    ) -> impl Future<Output = Result<(), HavenError>> + Send;

    /// Current arming status.
    fn get_arming_status(&self) -> impl Future<Output = Result<ArmingStatus, HavenError>> + Send;

    /// Persist a new arming status.
    fn set_arming_status(
        &self,
        status: ArmingStatus,
    ) -> impl Future<Output = Result<(), HavenError>> + Send;

    /// The full sensor set, unique by id, in no particular order.
    fn get_sensors(&self) -> impl Future<Output = Result<Vec<Sensor>, HavenError>> + Send;

    /// Register a new sensor.
    fn add_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), HavenError>> + Send;

    /// Remove a sensor by id. Removing an unknown id is a no-op.
    fn remove_sensor(&self, id: SensorId) -> impl Future<Output = Result<(), HavenError>> + Send;

    /// Commit a mutated sensor record back to the store.
    fn update_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), HavenError>> + Send;
}

impl<T: StateStore + Send + Sync> StateStore for std::sync::Arc<T> {
    fn get_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, HavenError>> + Send {
        (**self).get_alarm_status()
    }

    fn set_alarm_status(
        &self,
        status: AlarmStatus,
    ) -> impl Future<Output = Result<(), HavenError>> + Send {
        (**self).set_alarm_status(status)
    }

    fn get_arming_status(&self) -> impl Future<Output = Result<ArmingStatus, HavenError>> + Send {
        (**self).get_arming_status()
    }

    fn set_arming_status(
        &self,
        status: ArmingStatus,
    ) -> impl Future<Output = Result<(), HavenError>> + Send {
        (**self).set_arming_status(status)
    }

    fn get_sensors(&self) -> impl Future<Output = Result<Vec<Sensor>, HavenError>> + Send {
        (**self).get_sensors()
    }

    fn add_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), HavenError>> + Send {
        (**self).add_sensor(sensor)
    }

    fn remove_sensor(&self, id: SensorId) -> impl Future<Output = Result<(), HavenError>> + Send {
        (**self).remove_sensor(id)
    }

    fn update_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), HavenError>> + Send {
        (**self).update_sensor(sensor)
    }
}
