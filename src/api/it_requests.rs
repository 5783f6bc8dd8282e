//! IT equipment request API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppResult, models::it_request::ItEquipmentRequest};

use super::{AuthenticatedUser, SearchQuery};

/// IT equipment requests list response
#[derive(Serialize, ToSchema)]
pub struct ItRequestsListResponse {
    pub items: Vec<ItEquipmentRequest>,
    pub total: i64,
}

/// List IT equipment requests
#[utoipa::path(
    get,
    path = "/it-requests",
    tag = "it-requests",
    security(("bearer_auth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "IT equipment requests", body = ItRequestsListResponse)
    )
)]
pub async fn list_it_requests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ItRequestsListResponse>> {
    let items = state.services.it_requests.list(query.q.as_deref()).await?;
    let total = items.len() as i64;
    Ok(Json(ItRequestsListResponse { items, total }))
}

/// Get one IT equipment request
#[utoipa::path(
    get,
    path = "/it-requests/{id}",
    tag = "it-requests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = ItEquipmentRequest)
    )
)]
pub async fn get_it_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ItEquipmentRequest>> {
    let request = state.services.it_requests.get(id).await?;
    Ok(Json(request))
}
