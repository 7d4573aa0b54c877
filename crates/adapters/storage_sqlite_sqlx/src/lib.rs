//! # haven-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`StateStore`](haven_app::ports::StateStore) port
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `haven-app` (for the port trait) and `haven-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod store;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use store::SqliteStateStore;
