//! Sensor payloads — what clients submit and what the registry reports.

use serde::{Deserialize, Serialize};

use crate::error::{HomeLinkError, ValidationError};
use crate::id::ServiceId;
use crate::time::Timestamp;

/// A client's request to attach a new sensor to a home.
///
/// Only these three fields reach the registry. The HTTP surface also accepts
/// `address`, `serial_number`, and `state`, which are part of the inbound
/// contract but are neither persisted nor forwarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorDraft {
    pub name: String,
    /// Client-declared type, e.g. `"TEMPERATURE_SENSOR"`. The registry
    /// client normalizes this before forwarding.
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub location: String,
}

impl SensorDraft {
    /// Create a draft from its three required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        sensor_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sensor_type: sensor_type.into(),
            location: location.into(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeLinkError::Validation`] when any required field is empty.
    pub fn validate(&self) -> Result<(), HomeLinkError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.sensor_type.is_empty() {
            return Err(ValidationError::EmptySensorType.into());
        }
        if self.location.is_empty() {
            return Err(ValidationError::EmptyLocation.into());
        }
        Ok(())
    }
}

/// One live reading as reported by the registry.
///
/// Ephemeral: decoded fresh on every aggregation pass and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDetail {
    /// The registry's identifier for the device (`service_id` in links).
    pub id: ServiceId,
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub location: String,
    pub value: f64,
    pub unit: String,
    pub status: String,
    pub last_updated: Timestamp,
}
