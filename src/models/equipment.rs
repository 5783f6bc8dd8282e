//! Equipment inventory model (equipos_ti)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::depreciation::{Depreciation, ScheduleEntry};

use super::enums::EquipmentModel;

/// Minimum accepted purchase cost at creation time. Inline edits follow a
/// looser rule (only negative values are rejected); the two contracts are
/// intentionally distinct.
pub const MIN_PURCHASE_COST: i64 = 1000;

/// Equipment asset record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    /// Serial number (unique, immutable, assigned at creation)
    pub serial_number: String,
    pub model: EquipmentModel,
    /// Employee the unit is assigned to, if any
    pub assigned_to: Option<String>,
    pub insured: bool,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub purchase_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    /// Purchase cost as a float for the depreciation engine
    pub fn purchase_cost_f64(&self) -> Option<f64> {
        self.purchase_cost.and_then(|cost| cost.to_f64())
    }
}

/// Create equipment request (strict contract: all acquisition facts required)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "serial number must not be empty"))]
    pub serial_number: String,
    pub model: EquipmentModel,
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub insured: bool,
    pub purchase_date: NaiveDate,
    #[schema(value_type = f64)]
    pub purchase_cost: Decimal,
}

/// Inline-edit request (loose contract: any subset of mutable fields)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub model: Option<EquipmentModel>,
    pub assigned_to: Option<String>,
    pub insured: Option<bool>,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub purchase_cost: Option<Decimal>,
}

/// Depreciation figures for one asset (coarse view: incurred only)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepreciationView {
    pub yearly_depreciation: f64,
    pub years_elapsed: f64,
    pub book_value: f64,
    /// Depreciation incurred per year 1..=5
    pub by_year: Vec<f64>,
    pub is_fully_depreciated: bool,
}

impl From<Depreciation> for DepreciationView {
    fn from(value: Depreciation) -> Self {
        Self {
            yearly_depreciation: value.yearly_depreciation,
            years_elapsed: value.years_elapsed,
            book_value: value.book_value,
            by_year: value.by_year.to_vec(),
            is_fully_depreciated: value.is_fully_depreciated,
        }
    }
}

/// One row of the projected five-year schedule (detail view)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleEntryView {
    pub year: u32,
    pub depreciation: f64,
    pub book_value: f64,
}

impl From<ScheduleEntry> for ScheduleEntryView {
    fn from(value: ScheduleEntry) -> Self {
        Self {
            year: value.year,
            depreciation: value.depreciation,
            book_value: value.book_value,
        }
    }
}

/// Asset together with its derived depreciation figures
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentWithDepreciation {
    #[serde(flatten)]
    pub asset: Equipment,
    pub depreciation: DepreciationView,
}
