//! News update model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::NewsType;

/// News update record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NewsUpdate {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Month the update is published for (first day of the month)
    pub published_for: NaiveDate,
    pub title: String,
    /// Markdown content
    pub content: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub news_type: NewsType,
    pub is_active: bool,
}

/// Create news request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNews {
    pub published_for: NaiveDate,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[serde(rename = "type", default)]
    pub news_type: NewsType,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Update news request (partial; also used to toggle visibility)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateNews {
    pub published_for: Option<NaiveDate>,
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub news_type: Option<NewsType>,
    pub is_active: Option<bool>,
}
