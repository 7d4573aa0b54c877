//! `SQLite` implementation of [`StateStore`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use haven_app::ports::StateStore;
use haven_domain::alarm::AlarmStatus;
use haven_domain::arming::ArmingStatus;
use haven_domain::error::HavenError;
use haven_domain::id::SensorId;
use haven_domain::sensor::{Sensor, SensorKind};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Sensor);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let kind_str: String = row.try_get("kind")?;
        let active: bool = row.try_get("active")?;

        let id = SensorId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let kind: SensorKind = decode(&kind_str).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Sensor {
            id,
            name,
            kind,
            active,
        }))
    }
}

/// Parse a bare stored string (`no_alarm`, `door`, …) back into its enum via
/// serde by re-quoting it.
fn decode<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(&format!("\"{raw}\""))
}

const SELECT_ALARM: &str = "SELECT alarm_status FROM system_status WHERE id = 1";
const UPDATE_ALARM: &str = "UPDATE system_status SET alarm_status = ? WHERE id = 1";
const SELECT_ARMING: &str = "SELECT arming_status FROM system_status WHERE id = 1";
const UPDATE_ARMING: &str = "UPDATE system_status SET arming_status = ? WHERE id = 1";

const SELECT_SENSORS: &str = "SELECT * FROM sensors";
const INSERT_SENSOR: &str = "INSERT INTO sensors (id, name, kind, active) VALUES (?, ?, ?, ?)";
const UPDATE_SENSOR: &str = "UPDATE sensors SET name = ?, kind = ?, active = ? WHERE id = ?";
const DELETE_SENSOR: &str = "DELETE FROM sensors WHERE id = ?";

/// `SQLite`-backed state store.
pub struct SqliteStateStore {
    pool: SqlitePool,
}

impl SqliteStateStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StateStore for SqliteStateStore {
    async fn get_alarm_status(&self) -> Result<AlarmStatus, HavenError> {
        let raw: String = sqlx::query_scalar(SELECT_ALARM)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(decode(&raw).map_err(StorageError::from)?)
    }

    async fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), HavenError> {
        sqlx::query(UPDATE_ALARM)
            .bind(status.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn get_arming_status(&self) -> Result<ArmingStatus, HavenError> {
        let raw: String = sqlx::query_scalar(SELECT_ARMING)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(decode(&raw).map_err(StorageError::from)?)
    }

    async fn set_arming_status(&self, status: ArmingStatus) -> Result<(), HavenError> {
        sqlx::query(UPDATE_ARMING)
            .bind(status.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn get_sensors(&self) -> Result<Vec<Sensor>, HavenError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_SENSORS)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn add_sensor(&self, sensor: Sensor) -> Result<(), HavenError> {
        sqlx::query(INSERT_SENSOR)
            .bind(sensor.id.to_string())
            .bind(&sensor.name)
            .bind(sensor.kind.to_string())
            .bind(sensor.active)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn remove_sensor(&self, id: SensorId) -> Result<(), HavenError> {
        sqlx::query(DELETE_SENSOR)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn update_sensor(&self, sensor: Sensor) -> Result<(), HavenError> {
        sqlx::query(UPDATE_SENSOR)
            .bind(&sensor.name)
            .bind(sensor.kind.to_string())
            .bind(sensor.active)
            .bind(sensor.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteStateStore {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();

        SqliteStateStore::new(db.pool().clone())
    }

    fn test_sensor(name: &str, kind: SensorKind) -> Sensor {
        Sensor::builder().name(name).kind(kind).build().unwrap()
    }

    #[tokio::test]
    async fn should_serve_seeded_statuses_on_fresh_database() {
        let store = setup().await;

        assert_eq!(store.get_alarm_status().await.unwrap(), AlarmStatus::NoAlarm);
        assert_eq!(
            store.get_arming_status().await.unwrap(),
            ArmingStatus::Disarmed,
        );
    }

    #[tokio::test]
    async fn should_roundtrip_alarm_status() {
        let store = setup().await;

        store
            .set_alarm_status(AlarmStatus::PendingAlarm)
            .await
            .unwrap();

        assert_eq!(
            store.get_alarm_status().await.unwrap(),
            AlarmStatus::PendingAlarm,
        );
    }

    #[tokio::test]
    async fn should_roundtrip_arming_status() {
        let store = setup().await;

        store
            .set_arming_status(ArmingStatus::ArmedHome)
            .await
            .unwrap();

        assert_eq!(
            store.get_arming_status().await.unwrap(),
            ArmingStatus::ArmedHome,
        );
    }

    #[tokio::test]
    async fn should_add_and_list_sensors() {
        let store = setup().await;
        let sensor = test_sensor("Front Door", SensorKind::Door);
        let id = sensor.id;

        store.add_sensor(sensor).await.unwrap();

        let sensors = store.get_sensors().await.unwrap();
        assert_eq!(sensors.len(), 1);
        assert_eq!(sensors[0].id, id);
        assert_eq!(sensors[0].name, "Front Door");
        assert_eq!(sensors[0].kind, SensorKind::Door);
        assert!(!sensors[0].active);
    }

    #[tokio::test]
    async fn should_update_sensor_active_flag() {
        let store = setup().await;
        let mut sensor = test_sensor("Hallway Motion", SensorKind::Motion);
        store.add_sensor(sensor.clone()).await.unwrap();

        sensor.active = true;
        store.update_sensor(sensor.clone()).await.unwrap();

        let sensors = store.get_sensors().await.unwrap();
        assert!(sensors[0].active);
    }

    #[tokio::test]
    async fn should_ignore_update_for_unknown_sensor() {
        let store = setup().await;

        store
            .update_sensor(test_sensor("Ghost", SensorKind::Window))
            .await
            .unwrap();

        assert!(store.get_sensors().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_remove_sensor_by_id() {
        let store = setup().await;
        let sensor = test_sensor("Kitchen Window", SensorKind::Window);
        let id = sensor.id;
        store.add_sensor(sensor).await.unwrap();

        store.remove_sensor(id).await.unwrap();

        assert!(store.get_sensors().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_duplicate_sensor_id() {
        let store = setup().await;
        let sensor = test_sensor("Back Door", SensorKind::Door);
        store.add_sensor(sensor.clone()).await.unwrap();

        let result = store.add_sensor(sensor).await;

        assert!(matches!(result, Err(HavenError::Storage(_))));
    }
}
