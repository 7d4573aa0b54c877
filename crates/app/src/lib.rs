//! # haven-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StateStore` — persistence for statuses and the sensor set
//!   - `CatClassifier` — camera image analysis
//!   - `StatusObserver` — synchronous status-change notifications
//! - Provide the **`SecurityService`** use-case: the one component that owns
//!   every alarm transition decision
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `haven-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
