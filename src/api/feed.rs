//! Merged activity feed endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::feed::FeedItem};

use super::{AuthenticatedUser, SearchQuery};

/// Feed response (at most the 50 most recent items)
#[derive(Serialize, ToSchema)]
pub struct FeedResponse {
    pub items: Vec<FeedItem>,
    pub total: i64,
}

/// Latest activity across vacation requests, travel notifications and IT
/// equipment requests
#[utoipa::path(
    get,
    path = "/feed",
    tag = "feed",
    security(("bearer_auth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "Merged activity feed", body = FeedResponse)
    )
)]
pub async fn get_feed(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<FeedResponse>> {
    let items = state.services.feed.feed(query.q.as_deref()).await?;
    let total = items.len() as i64;
    Ok(Json(FeedResponse { items, total }))
}
