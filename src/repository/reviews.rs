//! Review status updates shared by the reviewable tables

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::ReviewStatus,
};

/// Tables carrying a review_status column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTable {
    VacationRequests,
    TravelNotifications,
    ItEquipmentRequests,
}

impl ReviewTable {
    pub fn table_name(&self) -> &'static str {
        match self {
            ReviewTable::VacationRequests => "vacation_requests",
            ReviewTable::TravelNotifications => "travel_notifications",
            ReviewTable::ItEquipmentRequests => "it_equipment_requests",
        }
    }
}

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Single-field review status update. The table name comes from the
    /// closed [`ReviewTable`] enum, never from user input.
    pub async fn set_status(
        &self,
        table: ReviewTable,
        id: Uuid,
        status: ReviewStatus,
    ) -> AppResult<()> {
        let query = format!(
            "UPDATE {} SET review_status = $1 WHERE id = $2",
            table.table_name()
        );
        let result = sqlx::query(&query)
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Record {} not found in {}",
                id,
                table.table_name()
            )));
        }
        Ok(())
    }
}
