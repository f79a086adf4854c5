//! JSON REST handlers for sensor linking and aggregation.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use homelink_app::ports::{DeviceRegistry, EventPublisher, HomeRepository, LinkRepository};
use homelink_domain::id::{HomeId, ServiceId};
use homelink_domain::sensor::{SensorDetail, SensorDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for attaching a sensor to a home.
///
/// `address`, `serial_number`, and `state` are accepted for contract
/// compatibility but are neither persisted nor forwarded to the registry.
#[derive(Deserialize)]
pub struct CreateSensorRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub location: String,
    pub address: Option<String>,
    pub serial_number: Option<i64>,
    pub state: Option<String>,
}

/// Success body for a newly linked sensor.
#[derive(Serialize)]
pub struct LinkedResponse {
    pub home_id: HomeId,
    pub service_id: ServiceId,
    pub status: &'static str,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<LinkedResponse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<SensorDetail>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/v1/home/{id}/sensor`
pub async fn create<HR, LR, RG, EP>(
    State(state): State<AppState<HR, LR, RG, EP>>,
    Path(id): Path<i64>,
    Json(req): Json<CreateSensorRequest>,
) -> Result<CreateResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let draft = SensorDraft::new(req.name, req.sensor_type, req.location);
    let link = state
        .sensor_service
        .link_sensor(HomeId::from_i64(id), draft)
        .await?;

    Ok(CreateResponse::Created(Json(LinkedResponse {
        home_id: link.home_id,
        service_id: link.service_id,
        status: "linked",
    })))
}

/// `GET /api/v1/home/{id}/sensors`
pub async fn list<HR, LR, RG, EP>(
    State(state): State<AppState<HR, LR, RG, EP>>,
    Path(id): Path<i64>,
) -> Result<ListResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let details = state
        .sensor_service
        .read_sensors(HomeId::from_i64(id))
        .await?;
    Ok(ListResponse::Ok(Json(details)))
}
