//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use haven_domain::error::HavenError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HavenError`] to an HTTP response with appropriate status code.
pub struct ApiError(HavenError);

impl From<HavenError> for ApiError {
    fn from(err: HavenError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HavenError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HavenError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HavenError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            HavenError::Classifier(err) => {
                tracing::error!(error = %err, "classifier error");
                (
                    StatusCode::BAD_GATEWAY,
                    "image classification unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
