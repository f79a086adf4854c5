//! Sensor link — the persisted association between a home and a registry
//! device.
//!
//! A link exists if and only if a registration call against the registry
//! succeeded for that device. The facade stores nothing else about the
//! sensor; every reading is fetched from the registry on demand.

use serde::{Deserialize, Serialize};

use crate::id::{HomeId, ServiceId};

/// "Home X has a device the registry knows as Y."
///
/// Links are append-only: they are never updated, and nothing currently
/// deletes them (home deletion does not cascade). Duplicate links for the
/// same `(home_id, service_id)` pair are permitted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorLink {
    pub home_id: HomeId,
    pub service_id: ServiceId,
}

impl SensorLink {
    /// Associate a home with a registry-assigned device identifier.
    #[must_use]
    pub fn new(home_id: HomeId, service_id: ServiceId) -> Self {
        Self {
            home_id,
            service_id,
        }
    }
}
