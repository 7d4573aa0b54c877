//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use haven_app::ports::{CatClassifier, StateStore};
use haven_app::services::security_service::SecurityService;

/// Application state shared across all axum handlers.
///
/// Generic over the store and classifier types to avoid dynamic dispatch.
/// The whole security service sits behind a single async [`Mutex`]: its
/// operations read and write shared state across multiple steps and are not
/// atomic by construction, so the host serializes them here. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S, C> {
    /// The alarm state machine.
    pub security_service: Arc<Mutex<SecurityService<S, C>>>,
}

impl<S, C> Clone for AppState<S, C> {
    fn clone(&self) -> Self {
        Self {
            security_service: Arc::clone(&self.security_service),
        }
    }
}

impl<S, C> AppState<S, C>
where
    S: StateStore + Send + Sync + 'static,
    C: CatClassifier + Send + Sync + 'static,
{
    /// Create a new application state owning the given service.
    pub fn new(security_service: SecurityService<S, C>) -> Self {
        Self {
            security_service: Arc::new(Mutex::new(security_service)),
        }
    }

    /// Create a new application state from a pre-wrapped service.
    ///
    /// Use this when the service needs to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_shared(security_service: Arc<Mutex<SecurityService<S, C>>>) -> Self {
        Self { security_service }
    }
}
