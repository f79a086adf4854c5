//! Shared application state for axum handlers.

use std::sync::Arc;

use homelink_app::ports::{DeviceRegistry, EventPublisher, HomeRepository, LinkRepository};
use homelink_app::services::home_service::HomeService;
use homelink_app::services::sensor_service::SensorService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository, registry, and publisher types to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<HR, LR, RG, EP> {
    /// Home CRUD service.
    pub home_service: Arc<HomeService<HR, EP>>,
    /// Sensor link/aggregation service.
    pub sensor_service: Arc<SensorService<LR, RG>>,
}

impl<HR, LR, RG, EP> Clone for AppState<HR, LR, RG, EP> {
    fn clone(&self) -> Self {
        Self {
            home_service: Arc::clone(&self.home_service),
            sensor_service: Arc::clone(&self.sensor_service),
        }
    }
}

impl<HR, LR, RG, EP> AppState<HR, LR, RG, EP>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        home_service: HomeService<HR, EP>,
        sensor_service: SensorService<LR, RG>,
    ) -> Self {
        Self {
            home_service: Arc::new(home_service),
            sensor_service: Arc::new(sensor_service),
        }
    }
}
