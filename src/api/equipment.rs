//! Equipment inventory API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        enums::EquipmentModel,
        equipment::{
            CreateEquipment, EquipmentWithDepreciation, ScheduleEntryView, UpdateEquipment,
        },
    },
};

use super::{AuthenticatedUser, SearchQuery};

/// Inventory list response
#[derive(Serialize, ToSchema)]
pub struct EquipmentListResponse {
    pub items: Vec<EquipmentWithDepreciation>,
    pub total: i64,
}

/// Projected depreciation schedule for one asset
#[derive(Serialize, ToSchema)]
pub struct DepreciationScheduleResponse {
    pub serial_number: String,
    pub model: EquipmentModel,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub purchase_cost: Option<Decimal>,
    pub yearly_depreciation: f64,
    /// Full five-year projection, independent of elapsed time
    pub schedule: Vec<ScheduleEntryView>,
}

/// List the inventory with depreciation figures
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "Equipment list", body = EquipmentListResponse)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<EquipmentListResponse>> {
    let items = state.services.equipment.list(query.q.as_deref()).await?;
    let total = items.len() as i64;
    Ok(Json(EquipmentListResponse { items, total }))
}

/// Get one asset by serial number
#[utoipa::path(
    get,
    path = "/equipment/{serial}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Asset with depreciation", body = EquipmentWithDepreciation)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(serial): Path<String>,
) -> AppResult<Json<EquipmentWithDepreciation>> {
    let item = state.services.equipment.get(&serial).await?;
    Ok(Json(item))
}

/// Register a new asset
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Asset created", body = EquipmentWithDepreciation),
        (status = 409, description = "Serial number already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<EquipmentWithDepreciation>)> {
    let item = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Inline-edit an asset (any subset of mutable fields)
#[utoipa::path(
    patch,
    path = "/equipment/{serial}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("serial" = String, Path, description = "Serial number")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Asset updated", body = EquipmentWithDepreciation)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(serial): Path<String>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<EquipmentWithDepreciation>> {
    let item = state.services.equipment.update(&serial, &data).await?;
    Ok(Json(item))
}

/// Projected five-year depreciation schedule
#[utoipa::path(
    get,
    path = "/equipment/{serial}/depreciation",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Depreciation schedule", body = DepreciationScheduleResponse)
    )
)]
pub async fn get_depreciation_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(serial): Path<String>,
) -> AppResult<Json<DepreciationScheduleResponse>> {
    let (asset, schedule) = state.services.equipment.schedule(&serial).await?;
    let yearly_depreciation = schedule[0].depreciation;
    Ok(Json(DepreciationScheduleResponse {
        serial_number: asset.serial_number,
        model: asset.model,
        purchase_date: asset.purchase_date,
        purchase_cost: asset.purchase_cost,
        yearly_depreciation,
        schedule: schedule.into_iter().map(Into::into).collect(),
    }))
}
