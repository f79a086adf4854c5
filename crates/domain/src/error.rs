//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HomeLinkError`]
//! via `#[from]` (or a boxed source for adapter-internal errors).

use crate::id::ServiceId;

/// Top-level error for all application and adapter operations.
#[derive(Debug, thiserror::Error)]
pub enum HomeLinkError {
    /// Input failed a domain invariant. No side effects have happened.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A locally-owned record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A call to the legacy device registry failed.
    #[error("registry error")]
    Registry(#[from] RegistryError),

    /// The local store failed. When this happens after a successful registry
    /// registration, the remote device is left orphaned; there is no
    /// compensation path.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by caller input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("sensor type must not be empty")]
    EmptySensorType,
    #[error("location must not be empty")]
    EmptyLocation,
}

/// A referenced record does not exist in the local store.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity kind (e.g. `"Home"`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// Outcomes of a call to the legacy device registry.
///
/// `Unavailable` and `Rejected` abort the create-sensor workflow before any
/// local state is touched, so they are safe to retry. During aggregation every
/// variant is logged and the affected sensor is dropped from the result.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The network call could not complete (connect failure, timeout, …).
    #[error("registry unreachable")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The registry answered with an unexpected status code.
    #[error("registry rejected the request with status {status}")]
    Rejected { status: u16 },

    /// The registry does not know the requested device.
    #[error("sensor {service_id} not found in registry")]
    NotFound { service_id: ServiceId },

    /// The registry answered with a body we could not decode.
    #[error("failed to decode registry response")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure to hand an event to the outbound publish queue.
///
/// Deliberately *not* a [`HomeLinkError`] variant: publishing is best-effort
/// and must never fail the operation that produced the event. Callers log the
/// error and move on.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    /// The bounded outbound queue is full; the event was dropped.
    #[error("event queue is full")]
    QueueFull,
    /// The publish pipeline has shut down; the event was dropped.
    #[error("event pipeline is closed")]
    Closed,
}
