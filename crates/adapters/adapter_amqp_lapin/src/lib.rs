//! # homelink-adapter-amqp-lapin
//!
//! AMQP adapter — publishes home lifecycle events to a topic exchange.
//!
//! ## Responsibilities
//! - Implement the `EventPublisher` port defined in `homelink-app`
//! - Keep publishing off the request path: `publish` is a non-blocking hand-off
//!   into a bounded queue drained by a background relay task
//! - Declare the (durable) topic exchange before every publish
//! - Log and drop events on any broker failure (no retry, no outbox, no
//!   delivery confirmation)
//!
//! ## Dependency rule
//! Depends on `homelink-app` (for the port trait) and `homelink-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod config;
pub mod error;
pub mod publisher;

pub use config::AmqpConfig;
pub use error::AmqpError;
pub use publisher::AmqpEventPublisher;
