//! Review cycle endpoints for the three reviewable tables
//!
//! The request carries the status the client saw at click time; the server
//! advances the cycle from that value. Two concurrent clicks race and the
//! last write wins.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult, models::enums::ReviewStatus, repository::reviews::ReviewTable, AppState,
};

use super::AuthenticatedUser;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReviewTransitionRequest {
    /// Status the client currently displays; absent reads as unreviewed
    pub current: Option<ReviewStatus>,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewTransitionResponse {
    pub review_status: ReviewStatus,
}

async fn advance(
    state: &AppState,
    table: ReviewTable,
    id: Uuid,
    request: ReviewTransitionRequest,
) -> AppResult<Json<ReviewTransitionResponse>> {
    let review_status = state
        .services
        .reviews
        .advance(table, id, request.current)
        .await?;
    Ok(Json(ReviewTransitionResponse { review_status }))
}

/// Cycle the review status of a vacation request
#[utoipa::path(
    post,
    path = "/vacations/{id}/review",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = ReviewTransitionRequest,
    responses(
        (status = 200, description = "New review status", body = ReviewTransitionResponse)
    )
)]
pub async fn review_vacation(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviewTransitionRequest>,
) -> AppResult<Json<ReviewTransitionResponse>> {
    advance(&state, ReviewTable::VacationRequests, id, request).await
}

/// Cycle the review status of a travel notification
#[utoipa::path(
    post,
    path = "/travel/{id}/review",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Notification ID")),
    request_body = ReviewTransitionRequest,
    responses(
        (status = 200, description = "New review status", body = ReviewTransitionResponse)
    )
)]
pub async fn review_travel(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviewTransitionRequest>,
) -> AppResult<Json<ReviewTransitionResponse>> {
    advance(&state, ReviewTable::TravelNotifications, id, request).await
}

/// Cycle the review status of an IT equipment request
#[utoipa::path(
    post,
    path = "/it-requests/{id}/review",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = ReviewTransitionRequest,
    responses(
        (status = 200, description = "New review status", body = ReviewTransitionResponse)
    )
)]
pub async fn review_it_request(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviewTransitionRequest>,
) -> AppResult<Json<ReviewTransitionResponse>> {
    advance(&state, ReviewTable::ItEquipmentRequests, id, request).await
}
