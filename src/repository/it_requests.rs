//! IT equipment request repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::it_request::ItEquipmentRequest,
};

#[derive(Clone)]
pub struct ItRequestsRepository {
    pool: Pool<Postgres>,
}

impl ItRequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all requests, newest first
    pub async fn list(&self) -> AppResult<Vec<ItEquipmentRequest>> {
        let rows = sqlx::query_as::<_, ItEquipmentRequest>(
            "SELECT * FROM it_equipment_requests ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a request by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ItEquipmentRequest> {
        sqlx::query_as::<_, ItEquipmentRequest>(
            "SELECT * FROM it_equipment_requests WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("IT equipment request {} not found", id)))
    }
}
