//! Best-effort AMQP publisher behind a bounded in-process queue.
//!
//! `publish` never blocks and never touches the network: it hands the event
//! to a relay task through a bounded channel. The relay owns the broker
//! connection, (re)establishes it lazily, declares the durable topic exchange
//! before every publish, and drops events whenever anything fails. An event
//! is attempted at most once.

use std::future::Future;

use lapin::options::{BasicPublishOptions, ExchangeDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties, ExchangeKind};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use homelink_app::ports::EventPublisher;
use homelink_domain::error::PublishError;
use homelink_domain::event::Event;

use crate::config::AmqpConfig;
use crate::error::AmqpError;

/// AMQP-backed implementation of the [`EventPublisher`] port.
pub struct AmqpEventPublisher {
    queue: mpsc::Sender<Event>,
}

impl AmqpEventPublisher {
    /// Create the publisher and spawn its relay task on the current runtime.
    #[must_use]
    pub fn start(config: AmqpConfig) -> Self {
        let (queue, events) = mpsc::channel(config.queue_capacity);
        tokio::spawn(relay(config, events));
        Self { queue }
    }

    /// Queue half only, with the receiving end handed back for inspection.
    #[cfg(test)]
    fn pair(capacity: usize) -> (Self, mpsc::Receiver<Event>) {
        let (queue, events) = mpsc::channel(capacity);
        (Self { queue }, events)
    }
}

impl EventPublisher for AmqpEventPublisher {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), PublishError>> + Send {
        let result = self.queue.try_send(event).map_err(|err| match err {
            TrySendError::Full(_) => PublishError::QueueFull,
            TrySendError::Closed(_) => PublishError::Closed,
        });
        async move { result }
    }
}

/// Drain the queue for the lifetime of the publisher.
async fn relay(config: AmqpConfig, mut events: mpsc::Receiver<Event>) {
    let mut link: Option<(Connection, Channel)> = None;

    while let Some(event) = events.recv().await {
        let routing_key = event.kind.routing_key();

        if let Err(err) = ensure_connected(&config, &mut link).await {
            tracing::warn!(error = %err, routing_key, "broker unreachable, dropping event");
            continue;
        }
        let Some((_, channel)) = link.as_ref() else {
            continue;
        };

        match publish_event(channel, &config.exchange, &event).await {
            Ok(()) => {
                tracing::debug!(exchange = %config.exchange, routing_key, "published event");
            }
            Err(err) => {
                tracing::warn!(error = %err, routing_key, "failed to publish event, dropping");
                // Reconnect from scratch on the next event.
                link = None;
            }
        }
    }
}

/// Establish the connection and channel if missing or no longer usable.
async fn ensure_connected(
    config: &AmqpConfig,
    link: &mut Option<(Connection, Channel)>,
) -> Result<(), lapin::Error> {
    let usable = link
        .as_ref()
        .is_some_and(|(conn, channel)| conn.status().connected() && channel.status().connected());
    if usable {
        return Ok(());
    }

    let conn = Connection::connect(&config.url, ConnectionProperties::default()).await?;
    let channel = conn.create_channel().await?;
    *link = Some((conn, channel));
    Ok(())
}

/// Declare the exchange and publish one event.
///
/// The exchange is declared (durable, topic) on every publish, so the broker
/// topology never has to pre-exist. No publisher confirm is awaited.
async fn publish_event(channel: &Channel, exchange: &str, event: &Event) -> Result<(), AmqpError> {
    channel
        .exchange_declare(
            exchange,
            ExchangeKind::Topic,
            ExchangeDeclareOptions {
                durable: true,
                ..ExchangeDeclareOptions::default()
            },
            FieldTable::default(),
        )
        .await?;

    let body = serde_json::to_vec(&event.payload)?;
    channel
        .basic_publish(
            exchange,
            event.kind.routing_key(),
            BasicPublishOptions::default(),
            &body,
            BasicProperties::default().with_content_type("application/json".into()),
        )
        .await?;

    Ok(())
}
