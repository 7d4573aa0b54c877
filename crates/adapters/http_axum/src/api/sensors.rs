//! JSON REST handlers for sensors.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use haven_app::ports::{CatClassifier, StateStore};
use haven_domain::error::{HavenError, NotFoundError};
use haven_domain::id::SensorId;
use haven_domain::sensor::{Sensor, SensorKind};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a sensor.
#[derive(Deserialize)]
pub struct CreateSensorRequest {
    pub name: String,
    pub kind: SensorKind,
}

/// Request body for changing a sensor's activation.
#[derive(Deserialize)]
pub struct UpdateActiveRequest {
    pub active: bool,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Sensor>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_sensor_id(raw: &str) -> Result<SensorId, ApiError> {
    SensorId::from_str(raw).map_err(|_| {
        ApiError::from(Into::<HavenError>::into(NotFoundError {
            entity: "Sensor",
            id: raw.to_string(),
        }))
    })
}

/// `GET /api/sensors`
pub async fn list<S, C>(State(state): State<AppState<S, C>>) -> Result<Json<Vec<Sensor>>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    let service = state.security_service.lock().await;
    let sensors = service.get_sensors().await?;
    Ok(Json(sensors))
}

/// `POST /api/sensors`
pub async fn create<S, C>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<CreateSensorRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    let sensor = Sensor::builder()
        .name(request.name)
        .kind(request.kind)
        .build()?;

    let service = state.security_service.lock().await;
    service.add_sensor(sensor.clone()).await?;

    Ok(CreateResponse::Created(Json(sensor)))
}

/// `DELETE /api/sensors/{id}`
pub async fn remove<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    let id = parse_sensor_id(&id)?;

    let service = state.security_service.lock().await;
    service.remove_sensor(id).await?;

    Ok(DeleteResponse::NoContent)
}

/// `PUT /api/sensors/{id}/active`
pub async fn update_active<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateActiveRequest>,
) -> Result<Json<Sensor>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    let id = parse_sensor_id(&id)?;

    let service = state.security_service.lock().await;
    let sensor = service
        .get_sensors()
        .await?
        .into_iter()
        .find(|sensor| sensor.id == id)
        .ok_or_else(|| {
            ApiError::from(Into::<HavenError>::into(NotFoundError {
                entity: "Sensor",
                id: id.to_string(),
            }))
        })?;

    service
        .change_sensor_activation_status(sensor.clone(), request.active)
        .await?;

    let updated = Sensor {
        active: request.active,
        ..sensor
    };
    Ok(Json(updated))
}
