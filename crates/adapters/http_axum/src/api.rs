//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod camera;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;
#[allow(clippy::missing_errors_doc)]
pub mod status;

use axum::Router;
use axum::routing::{delete, get, post, put};

use haven_app::ports::{CatClassifier, StateStore};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, C>() -> Router<AppState<S, C>>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    Router::new()
        // Status
        .route("/status", get(status::get::<S, C>))
        .route("/status/arming", put(status::set_arming::<S, C>))
        // Sensors
        .route(
            "/sensors",
            get(sensors::list::<S, C>).post(sensors::create::<S, C>),
        )
        .route("/sensors/{id}", delete(sensors::remove::<S, C>))
        .route("/sensors/{id}/active", put(sensors::update_active::<S, C>))
        // Camera
        .route("/camera/image", post(camera::submit::<S, C>))
}
