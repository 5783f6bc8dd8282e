//! Shared domain enums
//!
//! The string values are part of the persisted store contract and must not
//! be renamed: they match the Postgres enum types created by the migrations
//! and the values the intake forms already write.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ReviewStatus
// ---------------------------------------------------------------------------

/// Review cycle state shared by vacation requests, travel notifications and
/// IT equipment requests. A missing value reads as `Unreviewed`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "review_status", rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Unreviewed,
    InProgress,
    Done,
}

impl ReviewStatus {
    /// Next state in the fixed cycle: unreviewed → in_progress → done → unreviewed
    pub fn next(self) -> Self {
        match self {
            ReviewStatus::Unreviewed => ReviewStatus::InProgress,
            ReviewStatus::InProgress => ReviewStatus::Done,
            ReviewStatus::Done => ReviewStatus::Unreviewed,
        }
    }

    /// Absent status reads as unreviewed
    pub fn from_option(value: Option<Self>) -> Self {
        value.unwrap_or_default()
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReviewStatus::Unreviewed => "Sin revisar",
            ReviewStatus::InProgress => "Pendiente",
            ReviewStatus::Done => "Hecho",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentModel
// ---------------------------------------------------------------------------

/// Laptop models tracked in the IT inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "equipment_model", rename_all = "snake_case")]
pub enum EquipmentModel {
    MacPro,
    MacAir,
    Lenovo,
}

impl std::fmt::Display for EquipmentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentModel::MacPro => "Mac Pro",
            EquipmentModel::MacAir => "Mac Air",
            EquipmentModel::Lenovo => "Lenovo",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Workflow step states
// ---------------------------------------------------------------------------

/// Approval steps (manager and HR authorization)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "approval_state", rename_all = "snake_case")]
pub enum ApprovalState {
    #[default]
    Pendiente,
    Aprobado,
    Rechazado,
}

/// Contract signature step
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "signature_state", rename_all = "snake_case")]
pub enum SignatureState {
    #[default]
    Pendiente,
    Enviado,
    Recibido,
}

/// Congratulations email step
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "email_state", rename_all = "snake_case")]
pub enum EmailState {
    #[default]
    Pendiente,
    Listo,
}

// ---------------------------------------------------------------------------
// NewsType
// ---------------------------------------------------------------------------

/// Presentation type for a news update
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "news_type", rename_all = "snake_case")]
pub enum NewsType {
    #[default]
    Slide,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_cycle_advances_in_order() {
        assert_eq!(ReviewStatus::Unreviewed.next(), ReviewStatus::InProgress);
        assert_eq!(ReviewStatus::InProgress.next(), ReviewStatus::Done);
        assert_eq!(ReviewStatus::Done.next(), ReviewStatus::Unreviewed);
    }

    #[test]
    fn review_cycle_is_a_three_cycle() {
        for start in [
            ReviewStatus::Unreviewed,
            ReviewStatus::InProgress,
            ReviewStatus::Done,
        ] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn missing_review_status_reads_as_unreviewed() {
        assert_eq!(ReviewStatus::from_option(None), ReviewStatus::Unreviewed);
        assert_eq!(
            ReviewStatus::from_option(Some(ReviewStatus::Done)),
            ReviewStatus::Done
        );
    }

    #[test]
    fn wire_names_match_store_contract() {
        assert_eq!(
            serde_json::to_string(&ReviewStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&EquipmentModel::MacPro).unwrap(),
            "\"mac_pro\""
        );
        assert_eq!(
            serde_json::to_string(&ApprovalState::Rechazado).unwrap(),
            "\"rechazado\""
        );
        assert_eq!(
            serde_json::to_string(&SignatureState::Enviado).unwrap(),
            "\"enviado\""
        );
        assert_eq!(serde_json::to_string(&EmailState::Listo).unwrap(), "\"listo\"");
        assert_eq!(serde_json::to_string(&NewsType::Slide).unwrap(), "\"slide\"");
    }
}
