//! # homelink-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `homelink-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `homelink-app` (for port traits) and `homelink-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod home_repo;
pub mod link_repo;
pub mod pool;

pub use error::StorageError;
pub use home_repo::SqliteHomeRepository;
pub use link_repo::SqliteLinkRepository;
pub use pool::{Config, Database};
