//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homelink_app::ports::{DeviceRegistry, EventPublisher, HomeRepository, LinkRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API under `/api/v1` and includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<HR, LR, RG, EP>(state: AppState<HR, LR, RG, EP>) -> Router
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
