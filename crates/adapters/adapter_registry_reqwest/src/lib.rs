//! # homelink-adapter-registry-reqwest
//!
//! HTTP client adapter for the legacy device registry.
//!
//! ## Responsibilities
//! - Implement the `DeviceRegistry` port defined in `homelink-app`
//! - Translate the client-facing sensor payload into the registry's schema
//! - Interpret registry status codes and decode response bodies
//! - Enforce a bounded per-call timeout (the caller propagates no deadline)
//!
//! ## Dependency rule
//! Depends on `homelink-app` (for the port trait) and `homelink-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod client;
pub mod config;

pub use client::HttpDeviceRegistry;
pub use config::RegistryConfig;
