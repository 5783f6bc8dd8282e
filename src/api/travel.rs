//! Travel notification API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppResult, models::travel::TravelNotification};

use super::{AuthenticatedUser, SearchQuery};

/// Travel notifications list response
#[derive(Serialize, ToSchema)]
pub struct TravelListResponse {
    pub items: Vec<TravelNotification>,
    pub total: i64,
}

/// List travel notifications
#[utoipa::path(
    get,
    path = "/travel",
    tag = "travel",
    security(("bearer_auth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "Travel notifications", body = TravelListResponse)
    )
)]
pub async fn list_travel(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<TravelListResponse>> {
    let items = state.services.travel.list(query.q.as_deref()).await?;
    let total = items.len() as i64;
    Ok(Json(TravelListResponse { items, total }))
}

/// Get one travel notification
#[utoipa::path(
    get,
    path = "/travel/{id}",
    tag = "travel",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification details", body = TravelNotification)
    )
)]
pub async fn get_travel(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TravelNotification>> {
    let notification = state.services.travel.get(id).await?;
    Ok(Json(notification))
}
