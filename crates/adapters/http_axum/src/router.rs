//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use haven_app::ports::{CatClassifier, StateStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts API routes under `/api` and a `/health` probe. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<S, C>(state: AppState<S, C>) -> Router
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
