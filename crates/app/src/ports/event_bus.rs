//! Event bus port — best-effort publication of domain events.

use std::future::Future;

use homelink_domain::error::PublishError;
use homelink_domain::event::Event;

/// Hands domain events to an outbound broker channel.
///
/// Publishing is fire-and-forget: an `Err` means the event was dropped, and
/// callers log it without letting it affect the triggering operation.
pub trait EventPublisher {
    /// Queue an event for publication.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), PublishError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), PublishError>> + Send {
        (**self).publish(event)
    }
}
