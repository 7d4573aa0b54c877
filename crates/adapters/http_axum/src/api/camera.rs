//! JSON REST handler for camera frames.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use haven_app::ports::{CatClassifier, StateStore};
use haven_domain::image::CameraImage;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the camera endpoint.
pub enum SubmitResponse {
    NoContent,
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `POST /api/camera/image`
///
/// Accepts the raw frame bytes; the classifier verdict drives the alarm
/// state machine. The response carries no body — clients observing status
/// changes subscribe to the event bus or poll `/api/status`.
pub async fn submit<S, C>(
    State(state): State<AppState<S, C>>,
    body: Bytes,
) -> Result<SubmitResponse, ApiError>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    let image = CameraImage::new(body.to_vec());

    let mut service = state.security_service.lock().await;
    service.process_image(&image).await?;

    Ok(SubmitResponse::NoContent)
}
