//! JSON REST handlers for system status and arming.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use haven_app::ports::{CatClassifier, StateStore};
use haven_domain::alarm::AlarmStatus;
use haven_domain::arming::ArmingStatus;

use crate::error::ApiError;
use crate::state::AppState;

/// Combined system status returned by the status endpoints.
#[derive(Serialize)]
pub struct StatusResponse {
    pub alarm_status: AlarmStatus,
    pub arming_status: ArmingStatus,
}

/// Request body for changing the arming status.
#[derive(Deserialize)]
pub struct SetArmingRequest {
    pub arming_status: ArmingStatus,
}

/// `GET /api/status`
pub async fn get<S, C>(
    State(state): State<AppState<S, C>>,
) -> Result<Json<StatusResponse>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    let service = state.security_service.lock().await;
    let alarm_status = service.get_alarm_status().await?;
    let arming_status = service.get_arming_status().await?;

    Ok(Json(StatusResponse {
        alarm_status,
        arming_status,
    }))
}

/// `PUT /api/status/arming`
pub async fn set_arming<S, C>(
    State(state): State<AppState<S, C>>,
    Json(request): Json<SetArmingRequest>,
) -> Result<Json<StatusResponse>, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    let service = state.security_service.lock().await;
    service.set_arming_status(request.arming_status).await?;

    let alarm_status = service.get_alarm_status().await?;
    let arming_status = service.get_arming_status().await?;

    Ok(Json(StatusResponse {
        alarm_status,
        arming_status,
    }))
}
