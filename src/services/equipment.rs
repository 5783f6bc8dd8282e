//! Equipment inventory service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    depreciation::{self, ScheduleEntry},
    error::{AppError, AppResult},
    models::equipment::{
        CreateEquipment, Equipment, EquipmentWithDepreciation, UpdateEquipment, MIN_PURCHASE_COST,
    },
    repository::Repository,
    search,
    services::changes::{ChangeHub, ChangeOp},
};

const TABLE: &str = "equipos_ti";

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    changes: ChangeHub,
}

impl EquipmentService {
    pub fn new(repository: Repository, changes: ChangeHub) -> Self {
        Self { repository, changes }
    }

    /// List the inventory with depreciation figures, optionally filtered by
    /// serial number, model label, or assignee
    pub async fn list(&self, query: Option<&str>) -> AppResult<Vec<EquipmentWithDepreciation>> {
        let as_of = Utc::now().date_naive();
        let assets = self.repository.equipment.list().await?;
        let filtered = match query {
            Some(q) if !q.is_empty() => assets
                .into_iter()
                .filter(|asset| Self::matches(asset, q))
                .collect(),
            _ => assets,
        };
        Ok(filtered
            .into_iter()
            .map(|asset| Self::with_depreciation(asset, as_of))
            .collect())
    }

    pub async fn get(&self, serial: &str) -> AppResult<EquipmentWithDepreciation> {
        let asset = self.repository.equipment.get_by_serial(serial).await?;
        Ok(Self::with_depreciation(asset, Utc::now().date_naive()))
    }

    /// Create an asset. Strict contract: serial non-empty, model given,
    /// purchase date given, cost at or above the minimum threshold.
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<EquipmentWithDepreciation> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if data.purchase_cost < Decimal::from(MIN_PURCHASE_COST) {
            return Err(AppError::Validation(format!(
                "purchase cost must be at least {}",
                MIN_PURCHASE_COST
            )));
        }
        let asset = self.repository.equipment.create(data).await?;
        self.changes.publish(TABLE, ChangeOp::Insert);
        Ok(Self::with_depreciation(asset, Utc::now().date_naive()))
    }

    /// Inline edit. Loose contract: only a negative cost is rejected; a zero
    /// cost is accepted and simply yields zero depreciation.
    pub async fn update(
        &self,
        serial: &str,
        data: &UpdateEquipment,
    ) -> AppResult<EquipmentWithDepreciation> {
        if let Some(cost) = data.purchase_cost {
            if cost < Decimal::ZERO {
                return Err(AppError::Validation(
                    "purchase cost cannot be negative".to_string(),
                ));
            }
        }
        let asset = self.repository.equipment.update(serial, data).await?;
        self.changes.publish(TABLE, ChangeOp::Update);
        Ok(Self::with_depreciation(asset, Utc::now().date_naive()))
    }

    /// Projected five-year schedule for the detail view
    pub async fn schedule(&self, serial: &str) -> AppResult<(Equipment, [ScheduleEntry; 5])> {
        let asset = self.repository.equipment.get_by_serial(serial).await?;
        let schedule =
            depreciation::projected_schedule(asset.purchase_date, asset.purchase_cost_f64());
        Ok((asset, schedule))
    }

    fn with_depreciation(asset: Equipment, as_of: NaiveDate) -> EquipmentWithDepreciation {
        let figures =
            depreciation::compute(asset.purchase_date, asset.purchase_cost_f64(), as_of);
        EquipmentWithDepreciation {
            asset,
            depreciation: figures.into(),
        }
    }

    fn matches(asset: &Equipment, query: &str) -> bool {
        let model_label = asset.model.to_string();
        search::any_match(
            [
                asset.serial_number.as_str(),
                model_label.as_str(),
                asset.assigned_to.as_deref().unwrap_or(""),
            ],
            query,
        )
    }
}
