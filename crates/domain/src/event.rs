//! Event — a best-effort broker notification about a home lifecycle change.
//!
//! Events carry no delivery guarantee: they are attempted at most once and
//! may be silently lost when the broker is unreachable. Nothing in the
//! facade's correctness depends on them.

use serde::{Deserialize, Serialize};

use crate::home::Home;
use crate::id::HomeId;

/// Name of the topic exchange all home events are published to.
pub const HOMES_EXCHANGE: &str = "homes_exchange";

/// What happened, mapped one-to-one onto broker routing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    HomeCreated,
    HomeDeleted,
}

impl EventKind {
    /// The routing key published for this kind of event.
    #[must_use]
    pub fn routing_key(self) -> &'static str {
        match self {
            Self::HomeCreated => "home.created",
            Self::HomeDeleted => "home.deleted",
        }
    }
}

/// An outbound domain event: a kind plus its JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub payload: serde_json::Value,
}

impl Event {
    /// Event announcing a freshly created home; body is the full home.
    #[must_use]
    pub fn home_created(home: &Home) -> Self {
        Self {
            kind: EventKind::HomeCreated,
            payload: serde_json::json!(home),
        }
    }

    /// Event announcing a deleted home; body is `{"home_id": N}`.
    #[must_use]
    pub fn home_deleted(home_id: HomeId) -> Self {
        Self {
            kind: EventKind::HomeDeleted,
            payload: serde_json::json!({ "home_id": home_id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    #[test]
    fn should_map_kinds_to_routing_keys() {
        assert_eq!(EventKind::HomeCreated.routing_key(), "home.created");
        assert_eq!(EventKind::HomeDeleted.routing_key(), "home.deleted");
    }

    #[test]
    fn should_embed_full_home_in_created_event() {
        let home = Home {
            home_id: HomeId::from_i64(5),
            user_id: 1,
            name: "Cabin".to_string(),
            city: "Bergen".to_string(),
            street: String::new(),
            num: 0,
            created_at: now(),
        };
        let event = Event::home_created(&home);
        assert_eq!(event.kind, EventKind::HomeCreated);
        assert_eq!(event.payload["home_id"], 5);
        assert_eq!(event.payload["name"], "Cabin");
    }

    #[test]
    fn should_embed_only_id_in_deleted_event() {
        let event = Event::home_deleted(HomeId::from_i64(9));
        assert_eq!(event.kind, EventKind::HomeDeleted);
        assert_eq!(event.payload, serde_json::json!({ "home_id": 9 }));
    }
}
