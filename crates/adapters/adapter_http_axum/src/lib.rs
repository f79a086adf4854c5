//! # homelink-adapter-http-axum
//!
//! HTTP adapter using axum — serves the facade's REST API.
//!
//! ## Responsibilities
//! - Expose home CRUD and sensor link/aggregate endpoints under `/api/v1`
//! - Map domain errors onto HTTP status codes
//! - Trace each request/response via `tower-http`
//!
//! ## Dependency rule
//! Depends on `homelink-app` (for port traits and services) and
//! `homelink-domain` (for domain types). The `app` and `domain` crates must
//! never reference this adapter.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
