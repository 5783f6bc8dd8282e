//! Travel notification repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::travel::TravelNotification,
};

#[derive(Clone)]
pub struct TravelRepository {
    pool: Pool<Postgres>,
}

impl TravelRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all notifications, newest first
    pub async fn list(&self) -> AppResult<Vec<TravelNotification>> {
        let rows = sqlx::query_as::<_, TravelNotification>(
            "SELECT * FROM travel_notifications ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a notification by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<TravelNotification> {
        sqlx::query_as::<_, TravelNotification>(
            "SELECT * FROM travel_notifications WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Travel notification {} not found", id)))
    }
}
