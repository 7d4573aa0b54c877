//! Security service — the alarm state machine.
//!
//! Receives sensor events, arming changes, and camera frames; forwards
//! updates to the state store and makes every decision about changing the
//! alarm status. All transition logic for the system lives here.

use std::sync::Arc;

use haven_domain::alarm::AlarmStatus;
use haven_domain::arming::ArmingStatus;
use haven_domain::error::HavenError;
use haven_domain::id::SensorId;
use haven_domain::image::CameraImage;
use haven_domain::sensor::Sensor;

use crate::ports::{CatClassifier, StateStore, StatusObserver};

/// Confidence (percent scale) a label must reach before an image counts as
/// containing a cat.
pub const CAT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Application service orchestrating the alarm state machine.
///
/// State is read through the store on every operation — nothing is cached
/// here except the transient `cat_detected` flag, which holds the most
/// recent classifier verdict for the lifetime of this instance and is never
/// reset by arming changes.
///
/// Operations run to completion, observer notifications included, before
/// returning. The service itself holds no lock; hosts that share it across
/// tasks must serialize access externally.
pub struct SecurityService<S, C> {
    store: S,
    classifier: C,
    observers: Vec<Arc<dyn StatusObserver>>,
    cat_detected: bool,
}

impl<S: StateStore, C: CatClassifier> SecurityService<S, C> {
    /// Create a new service backed by the given store and classifier.
    pub fn new(store: S, classifier: C) -> Self {
        Self {
            store,
            classifier,
            observers: Vec::new(),
            cat_detected: false,
        }
    }

    /// Register an observer for status updates. Adding the same observer
    /// twice is a no-op.
    pub fn add_status_observer(&mut self, observer: Arc<dyn StatusObserver>) {
        if !self.observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            self.observers.push(observer);
        }
    }

    /// Unregister an observer. Removing an unknown observer is a no-op.
    pub fn remove_status_observer(&mut self, observer: &Arc<dyn StatusObserver>) {
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
    }

    /// Set the arming status for the system. Changing the arming status may
    /// also update the alarm status and resets every sensor.
    ///
    /// Disarming quiets the alarm and marks every sensor active; arming
    /// clears every sensor, and arming for home while the camera last showed
    /// a cat trips the alarm immediately.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the state store.
    #[tracing::instrument(skip(self))]
    pub async fn set_arming_status(&self, arming_status: ArmingStatus) -> Result<(), HavenError> {
        if arming_status == ArmingStatus::Disarmed {
            self.set_alarm_status(AlarmStatus::NoAlarm).await?;
            for mut sensor in self.store.get_sensors().await? {
                sensor.active = true;
                self.store.update_sensor(sensor).await?;
            }
        } else {
            for mut sensor in self.store.get_sensors().await? {
                sensor.active = false;
                self.store.update_sensor(sensor).await?;
            }
            if self.cat_detected && arming_status == ArmingStatus::ArmedHome {
                self.set_alarm_status(AlarmStatus::Alarm).await?;
            }
        }
        self.store.set_arming_status(arming_status).await?;
        for observer in &self.observers {
            observer.sensor_status_changed();
        }
        Ok(())
    }

    /// Update the alarm status when a sensor has been activated.
    async fn handle_sensor_activated(&self) -> Result<(), HavenError> {
        if self.store.get_arming_status().await? == ArmingStatus::Disarmed {
            // no problem if the system is disarmed
            return Ok(());
        }
        match self.store.get_alarm_status().await? {
            AlarmStatus::NoAlarm => self.set_alarm_status(AlarmStatus::PendingAlarm).await,
            AlarmStatus::PendingAlarm => self.set_alarm_status(AlarmStatus::Alarm).await,
            AlarmStatus::Alarm => Ok(()),
        }
    }

    /// Update the alarm status when a sensor has been deactivated.
    ///
    /// Deactivation does not consult the arming status; it de-escalates
    /// unconditionally.
    async fn handle_sensor_deactivated(&self) -> Result<(), HavenError> {
        match self.store.get_alarm_status().await? {
            AlarmStatus::PendingAlarm => self.set_alarm_status(AlarmStatus::NoAlarm).await,
            AlarmStatus::Alarm => self.set_alarm_status(AlarmStatus::PendingAlarm).await,
            AlarmStatus::NoAlarm => Ok(()),
        }
    }

    /// Change the activation status for the given sensor and update the
    /// alarm status if necessary.
    ///
    /// The transition is decided on the sensor's prior `active` value; the
    /// new value is then committed through the store. Afterwards, if every
    /// known sensor is active while the alarm is still pending, the alarm is
    /// forced back to quiet — this override runs last and can undo an
    /// escalation made earlier in the same call.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the state store.
    #[tracing::instrument(skip(self, sensor), fields(sensor_name = %sensor.name))]
    pub async fn change_sensor_activation_status(
        &self,
        mut sensor: Sensor,
        active: bool,
    ) -> Result<(), HavenError> {
        if !sensor.active && active {
            self.handle_sensor_activated().await?;
        } else if sensor.active && !active {
            self.handle_sensor_deactivated().await?;
        } else if sensor.active
            && active
            && self.store.get_alarm_status().await? == AlarmStatus::PendingAlarm
        {
            self.set_alarm_status(AlarmStatus::Alarm).await?;
        }
        sensor.active = active;
        self.store.update_sensor(sensor).await?;

        if self.cumulative_sensor_state().await?
            && self.store.get_alarm_status().await? == AlarmStatus::PendingAlarm
        {
            self.set_alarm_status(AlarmStatus::NoAlarm).await?;
        }
        Ok(())
    }

    /// True only if every tracked sensor is currently active (vacuously true
    /// for an empty sensor set).
    async fn cumulative_sensor_state(&self) -> Result<bool, HavenError> {
        Ok(self.store.get_sensors().await?.iter().all(|s| s.active))
    }

    /// Send a camera image through the classifier and update the alarm
    /// status according to the verdict.
    ///
    /// # Errors
    ///
    /// Returns a classifier error if analysis fails — in that case no state
    /// changes and no observer is notified — or a storage error from the
    /// state store.
    #[tracing::instrument(skip(self, image), fields(image_bytes = image.len()))]
    pub async fn process_image(&mut self, image: &CameraImage) -> Result<(), HavenError> {
        let detected = self
            .classifier
            .contains_cat(image, CAT_CONFIDENCE_THRESHOLD)
            .await?;
        self.on_cat_detected(detected).await
    }

    /// Handle a classifier verdict.
    async fn on_cat_detected(&mut self, detected: bool) -> Result<(), HavenError> {
        self.cat_detected = detected;
        if detected && self.store.get_arming_status().await? == ArmingStatus::ArmedHome {
            self.set_alarm_status(AlarmStatus::Alarm).await?;
        } else if !detected && !self.cumulative_sensor_state().await? {
            self.set_alarm_status(AlarmStatus::NoAlarm).await?;
        }

        for observer in &self.observers {
            observer.cat_detected(detected);
        }
        Ok(())
    }

    /// Change the alarm status of the system and notify all observers.
    ///
    /// This is the sole mutator of the alarm status; every other operation
    /// routes through it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the state store.
    pub async fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), HavenError> {
        self.store.set_alarm_status(status).await?;
        for observer in &self.observers {
            observer.alarm_status_changed(status);
        }
        Ok(())
    }

    /// Current alarm status.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the state store.
    pub async fn get_alarm_status(&self) -> Result<AlarmStatus, HavenError> {
        self.store.get_alarm_status().await
    }

    /// Current arming status.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the state store.
    pub async fn get_arming_status(&self) -> Result<ArmingStatus, HavenError> {
        self.store.get_arming_status().await
    }

    /// The full sensor set.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the state store.
    pub async fn get_sensors(&self) -> Result<Vec<Sensor>, HavenError> {
        self.store.get_sensors().await
    }

    /// Register a new sensor.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the state store.
    pub async fn add_sensor(&self, sensor: Sensor) -> Result<(), HavenError> {
        self.store.add_sensor(sensor).await
    }

    /// Remove a sensor by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the state store.
    pub async fn remove_sensor(&self, id: SensorId) -> Result<(), HavenError> {
        self.store.remove_sensor(id).await
    }
}
