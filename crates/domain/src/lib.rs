//! # homelink-domain
//!
//! Pure domain model for the homelink facade service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Homes** (the facade's own aggregate, owned locally)
//! - Define **Sensor links** (associations between a home and a device the
//!   legacy registry knows by a `service_id`)
//! - Define **Sensor details** (ephemeral readings decoded from the registry,
//!   never persisted)
//! - Define **Events** (`home.created` / `home.deleted` broker notifications)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod home;
pub mod link;
pub mod sensor;
