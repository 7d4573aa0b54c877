//! # havend — haven daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the state store and classifier adapters
//! - Construct the security service, injecting adapters via port traits
//! - Register the event bus as a status observer
//! - Build the axum router and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use haven_adapter_http_axum::state::AppState;
use haven_adapter_storage_sqlite_sqlx::SqliteStateStore;
use haven_app::event_bus::InProcessEventBus;
use haven_app::services::security_service::SecurityService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = haven_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let store = SqliteStateStore::new(db.pool().clone());

    // Classifier
    let classifier = haven_adapter_classifier_http::Config {
        endpoint: config.classifier.url.clone(),
        timeout: Duration::from_secs(config.classifier.timeout_secs),
    }
    .build()?;

    // Service + event bus
    let event_bus = Arc::new(InProcessEventBus::new(256));
    let mut security_service = SecurityService::new(store, classifier);
    security_service.add_status_observer(event_bus.clone());

    // Log every published status event until the bus closes.
    let mut events = event_bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(event = ?event.payload, "status event");
        }
    });

    // HTTP
    let state = AppState::new(security_service);
    let app = haven_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "havend listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
