//! JSON REST handlers for homes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homelink_app::ports::{DeviceRegistry, EventPublisher, HomeRepository, LinkRepository};
use homelink_domain::home::{Home, HomeUpdate, NewHome};
use homelink_domain::id::HomeId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a home. Only `name` is required.
#[derive(Deserialize)]
pub struct CreateHomeRequest {
    #[serde(default)]
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub num: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Home>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Home>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Home>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Home>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/v1/homes`
pub async fn list<HR, LR, RG, EP>(
    State(state): State<AppState<HR, LR, RG, EP>>,
) -> Result<ListResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let homes = state.home_service.list_homes().await?;
    Ok(ListResponse::Ok(Json(homes)))
}

/// `GET /api/v1/home/{id}`
pub async fn get_by_id<HR, LR, RG, EP>(
    State(state): State<AppState<HR, LR, RG, EP>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let home = state.home_service.get_home(HomeId::from_i64(id)).await?;
    Ok(GetResponse::Ok(Json(home)))
}

/// `POST /api/v1/home`
pub async fn create<HR, LR, RG, EP>(
    State(state): State<AppState<HR, LR, RG, EP>>,
    Json(req): Json<CreateHomeRequest>,
) -> Result<CreateResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let home = NewHome {
        user_id: req.user_id,
        name: req.name,
        city: req.city,
        street: req.street,
        num: req.num,
    };
    let created = state.home_service.create_home(home).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/home/{id}`
pub async fn update<HR, LR, RG, EP>(
    State(state): State<AppState<HR, LR, RG, EP>>,
    Path(id): Path<i64>,
    Json(req): Json<HomeUpdate>,
) -> Result<UpdateResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    let updated = state
        .home_service
        .update_home(HomeId::from_i64(id), req)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/home/{id}`
pub async fn delete<HR, LR, RG, EP>(
    State(state): State<AppState<HR, LR, RG, EP>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
    LR: LinkRepository + Send + Sync + 'static,
    RG: DeviceRegistry + Send + Sync + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    state.home_service.delete_home(HomeId::from_i64(id)).await?;
    Ok(DeleteResponse::NoContent)
}
