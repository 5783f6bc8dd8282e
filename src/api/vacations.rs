//! Vacation request API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::vacation::{VacationRequest, WorkflowStepUpdate},
    workflow::WorkflowSummary,
};

use super::{AuthenticatedUser, SearchQuery};

/// Vacation requests list response
#[derive(Serialize, ToSchema)]
pub struct VacationsListResponse {
    pub items: Vec<VacationRequest>,
    pub total: i64,
}

/// Request with its derived workflow view
#[derive(Serialize, ToSchema)]
pub struct VacationDetails {
    pub request: VacationRequest,
    pub workflow: WorkflowSummary,
}

impl From<VacationRequest> for VacationDetails {
    fn from(request: VacationRequest) -> Self {
        let workflow = request.workflow().summarize();
        Self { request, workflow }
    }
}

/// List vacation requests
#[utoipa::path(
    get,
    path = "/vacations",
    tag = "vacations",
    security(("bearer_auth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "Vacation requests", body = VacationsListResponse)
    )
)]
pub async fn list_vacations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<VacationsListResponse>> {
    let items = state.services.vacations.list(query.q.as_deref()).await?;
    let total = items.len() as i64;
    Ok(Json(VacationsListResponse { items, total }))
}

/// Get one vacation request with its workflow view
#[utoipa::path(
    get,
    path = "/vacations/{id}",
    tag = "vacations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = VacationDetails)
    )
)]
pub async fn get_vacation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VacationDetails>> {
    let request = state.services.vacations.get(id).await?;
    Ok(Json(request.into()))
}

/// Set a single workflow step
#[utoipa::path(
    put,
    path = "/vacations/{id}/workflow",
    tag = "vacations",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = WorkflowStepUpdate,
    responses(
        (status = 200, description = "Updated request with workflow view", body = VacationDetails)
    )
)]
pub async fn update_workflow_step(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(update): Json<WorkflowStepUpdate>,
) -> AppResult<Json<VacationDetails>> {
    let request = state.services.vacations.update_step(id, &update).await?;
    Ok(Json(request.into()))
}
