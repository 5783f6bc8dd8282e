//! Equipment inventory repository (equipos_ti)

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment ordered by serial number
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipos_ti ORDER BY serial_number"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by serial number
    pub async fn get_by_serial(&self, serial: &str) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipos_ti WHERE serial_number = $1")
            .bind(serial)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", serial)))
    }

    /// Create equipment; duplicate serial numbers surface as a conflict
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipos_ti (serial_number, model, assigned_to, insured, purchase_date, purchase_cost)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.serial_number)
        .bind(data.model)
        .bind(&data.assigned_to)
        .bind(data.insured)
        .bind(data.purchase_date)
        .bind(data.purchase_cost)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict(format!(
                        "Serial number {} already exists",
                        data.serial_number
                    ));
                }
            }
            AppError::Database(e)
        })?;
        Ok(row)
    }

    /// Partial update; the serial number itself is immutable
    pub async fn update(&self, serial: &str, data: &UpdateEquipment) -> AppResult<Equipment> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.model, "model");
        add_field!(data.assigned_to, "assigned_to");
        add_field!(data.insured, "insured");
        add_field!(data.purchase_date, "purchase_date");
        add_field!(data.purchase_cost, "purchase_cost");

        let query = format!(
            "UPDATE equipos_ti SET {} WHERE serial_number = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.model);
        bind_field!(data.assigned_to);
        bind_field!(data.insured);
        bind_field!(data.purchase_date);
        bind_field!(data.purchase_cost);

        builder
            .bind(serial)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", serial)))
    }
}
