//! Merged activity feed items

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::ReviewStatus;

/// Source table of a feed item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    Vacation,
    Travel,
    ItEquipment,
}

impl FeedKind {
    /// Display label, as shown on the dashboard cards
    pub fn label(&self) -> &'static str {
        match self {
            FeedKind::Vacation => "Vacaciones",
            FeedKind::Travel => "Viaje",
            FeedKind::ItEquipment => "Equipo TI",
        }
    }

    /// Logical table the item came from, for review updates and re-fetching
    pub fn table(&self) -> &'static str {
        match self {
            FeedKind::Vacation => "vacation_requests",
            FeedKind::Travel => "travel_notifications",
            FeedKind::ItEquipment => "it_equipment_requests",
        }
    }
}

/// One entry of the merged activity feed
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedItem {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub kind: FeedKind,
    /// Display label for the kind
    #[schema(value_type = String)]
    pub label: &'static str,
    pub person: String,
    pub email: String,
    pub summary: String,
    /// Kind-specific detail fields
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    pub review_status: Option<ReviewStatus>,
    /// Logical table name, for review updates
    #[schema(value_type = String)]
    pub table: &'static str,
}
