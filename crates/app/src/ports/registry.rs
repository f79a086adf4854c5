//! Device registry port — the facade's window into the legacy system that
//! owns device provisioning and telemetry.

use std::future::Future;

use homelink_domain::error::HomeLinkError;
use homelink_domain::id::ServiceId;
use homelink_domain::sensor::{SensorDetail, SensorDraft};

/// Remote calls against the legacy device registry.
///
/// Implementations enforce their own bounded per-call timeout; callers do not
/// propagate deadlines.
pub trait DeviceRegistry {
    /// Provision a device in the registry and return its assigned identifier.
    fn register(
        &self,
        draft: &SensorDraft,
    ) -> impl Future<Output = Result<ServiceId, HomeLinkError>> + Send;

    /// Read the current detail for one device.
    fn fetch(
        &self,
        service_id: ServiceId,
    ) -> impl Future<Output = Result<SensorDetail, HomeLinkError>> + Send;
}

impl<T: DeviceRegistry + Send + Sync> DeviceRegistry for std::sync::Arc<T> {
    fn register(
        &self,
        draft: &SensorDraft,
    ) -> impl Future<Output = Result<ServiceId, HomeLinkError>> + Send {
        (**self).register(draft)
    }

    fn fetch(
        &self,
        service_id: ServiceId,
    ) -> impl Future<Output = Result<SensorDetail, HomeLinkError>> + Send {
        (**self).fetch(service_id)
    }
}
