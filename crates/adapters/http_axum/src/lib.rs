//! # haven-adapter-http-axum
//!
//! JSON REST adapter using [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Expose the security service over HTTP: system status, arming changes,
//!   sensor management, camera frames
//! - Map [`HavenError`](haven_domain::error::HavenError) to HTTP status codes
//! - Log each request/response through the `tracing` ecosystem
//!
//! The adapter holds no decision logic: every request is a single call into
//! the security service behind one lock.
//!
//! ## Dependency rule
//! Depends on `haven-app` (service + port traits) and `haven-domain`.
//! The `app` and `domain` crates must never reference this adapter.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
