//! IT equipment request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::ReviewStatus;

/// IT equipment request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ItEquipmentRequest {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub requester: String,
    pub email: String,
    /// Requested equipment, free text
    pub equipment: String,
    /// Absent reads as unreviewed
    pub review_status: Option<ReviewStatus>,
}
