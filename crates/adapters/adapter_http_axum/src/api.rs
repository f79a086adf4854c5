//! JSON REST API handler modules and the `/api/v1` sub-router.

#[allow(clippy::missing_errors_doc)]
pub mod homes;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;

use axum::Router;
use axum::routing::{get, post};

use homelink_app::ports::{DeviceRegistry, EventPublisher, HomeRepository, LinkRepository};

use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<HR, LR, RG, EP>() -> Router<AppState<HR, LR, RG, EP>>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        // Homes
        .route("/homes", get(homes::list::<HR, LR, RG, EP>))
        .route("/home", post(homes::create::<HR, LR, RG, EP>))
        .route(
            "/home/{id}",
            get(homes::get_by_id::<HR, LR, RG, EP>)
                .put(homes::update::<HR, LR, RG, EP>)
                .delete(homes::delete::<HR, LR, RG, EP>),
        )
        // Sensors
        .route("/home/{id}/sensor", post(sensors::create::<HR, LR, RG, EP>))
        .route("/home/{id}/sensors", get(sensors::list::<HR, LR, RG, EP>))
}
