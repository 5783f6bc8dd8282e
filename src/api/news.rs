//! News update API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::news::{CreateNews, NewsUpdate, UpdateNews},
};

use super::{AuthenticatedUser, SearchQuery};

/// News list response
#[derive(Serialize, ToSchema)]
pub struct NewsListResponse {
    pub items: Vec<NewsUpdate>,
    pub total: i64,
}

/// List news updates
#[utoipa::path(
    get,
    path = "/news",
    tag = "news",
    security(("bearer_auth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "News updates", body = NewsListResponse)
    )
)]
pub async fn list_news(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<NewsListResponse>> {
    let items = state.services.news.list(query.q.as_deref()).await?;
    let total = items.len() as i64;
    Ok(Json(NewsListResponse { items, total }))
}

/// Create a news update
#[utoipa::path(
    post,
    path = "/news",
    tag = "news",
    security(("bearer_auth" = [])),
    request_body = CreateNews,
    responses(
        (status = 201, description = "News created", body = NewsUpdate)
    )
)]
pub async fn create_news(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateNews>,
) -> AppResult<(StatusCode, Json<NewsUpdate>)> {
    let news = state.services.news.create(&data).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// Update a news update (partial; also toggles visibility)
#[utoipa::path(
    put,
    path = "/news/{id}",
    tag = "news",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "News ID")),
    request_body = UpdateNews,
    responses(
        (status = 200, description = "News updated", body = NewsUpdate)
    )
)]
pub async fn update_news(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateNews>,
) -> AppResult<Json<NewsUpdate>> {
    let news = state.services.news.update(id, &data).await?;
    Ok(Json(news))
}

/// Delete a news update
#[utoipa::path(
    delete,
    path = "/news/{id}",
    tag = "news",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "News ID")),
    responses(
        (status = 204, description = "News deleted")
    )
)]
pub async fn delete_news(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.news.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
