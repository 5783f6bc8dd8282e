//! Vacation request repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::vacation::{VacationRequest, WorkflowStepUpdate},
};

#[derive(Clone)]
pub struct VacationsRepository {
    pool: Pool<Postgres>,
}

impl VacationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all requests, newest first
    pub async fn list(&self) -> AppResult<Vec<VacationRequest>> {
        let rows = sqlx::query_as::<_, VacationRequest>(
            "SELECT * FROM vacation_requests ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a request by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VacationRequest> {
        sqlx::query_as::<_, VacationRequest>("SELECT * FROM vacation_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vacation request {} not found", id)))
    }

    /// Set a single workflow step. Steps are independent; no ordering is
    /// enforced between them.
    pub async fn update_step(
        &self,
        id: Uuid,
        update: &WorkflowStepUpdate,
    ) -> AppResult<VacationRequest> {
        // Column name comes from the closed step enum, never from user input
        let query = format!(
            "UPDATE vacation_requests SET {} = $1 WHERE id = $2 RETURNING *",
            update.column()
        );
        let builder = match update {
            WorkflowStepUpdate::Step1AuthManager(value) => {
                sqlx::query_as::<_, VacationRequest>(&query).bind(*value)
            }
            WorkflowStepUpdate::Step2AuthRh(value) => {
                sqlx::query_as::<_, VacationRequest>(&query).bind(*value)
            }
            WorkflowStepUpdate::Step3ContractSignature(value) => {
                sqlx::query_as::<_, VacationRequest>(&query).bind(*value)
            }
            WorkflowStepUpdate::Step4CongratulationsEmail(value) => {
                sqlx::query_as::<_, VacationRequest>(&query).bind(*value)
            }
        };
        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vacation request {} not found", id)))
    }
}
