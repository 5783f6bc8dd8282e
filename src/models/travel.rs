//! Travel notification model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::ReviewStatus;

/// Travel notification record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TravelNotification {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub email: String,
    pub division: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destination: String,
    pub purpose: Option<String>,
    pub additional_expenses_needed: Option<bool>,
    pub additional_expenses_explanation: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub additional_expenses_budget: Option<Decimal>,
    pub emergency_contact: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub flight_info: Option<String>,
    pub hotel_booking: Option<String>,
    /// Absent reads as unreviewed
    pub review_status: Option<ReviewStatus>,
}
