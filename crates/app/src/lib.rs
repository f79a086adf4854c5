//! # homelink-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HomeRepository` — CRUD for locally-owned homes
//!   - `LinkRepository` — append/list for home↔device links
//!   - `DeviceRegistry` — register and read devices in the legacy registry
//!   - `EventPublisher` — best-effort broker notifications
//! - Define **driving/inbound ports** as use-case structs:
//!   - `HomeService` — create, read, update, delete homes (+ lifecycle events)
//!   - `SensorService` — the link orchestrator and the read aggregator
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `homelink-domain` only (plus `tokio` for task/sync primitives).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
