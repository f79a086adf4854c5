//! AMQP adapter error types.
//!
//! These errors never cross the port boundary: the relay task logs them and
//! drops the affected event.

/// Errors raised while talking to the broker.
#[derive(Debug, thiserror::Error)]
pub enum AmqpError {
    /// The lapin client returned a connection or protocol error.
    #[error("AMQP protocol error")]
    Protocol(#[from] lapin::Error),

    /// The event payload could not be serialized to JSON.
    #[error("failed to serialize event payload")]
    Payload(#[from] serde_json::Error),
}
