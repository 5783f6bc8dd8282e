//! News update repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::news::{CreateNews, NewsUpdate, UpdateNews},
};

#[derive(Clone)]
pub struct NewsRepository {
    pool: Pool<Postgres>,
}

impl NewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all news, most recent publication month first
    pub async fn list(&self) -> AppResult<Vec<NewsUpdate>> {
        let rows = sqlx::query_as::<_, NewsUpdate>(
            "SELECT * FROM news_updates ORDER BY published_for DESC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a news update by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<NewsUpdate> {
        sqlx::query_as::<_, NewsUpdate>("SELECT * FROM news_updates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News update {} not found", id)))
    }

    /// Create a news update
    pub async fn create(&self, data: &CreateNews) -> AppResult<NewsUpdate> {
        let row = sqlx::query_as::<_, NewsUpdate>(
            r#"
            INSERT INTO news_updates (published_for, title, content, type, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.published_for)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.news_type)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update (also used to toggle is_active)
    pub async fn update(&self, id: Uuid, data: &UpdateNews) -> AppResult<NewsUpdate> {
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

        add_field!(data.published_for, "published_for");
        add_field!(data.title, "title");
        add_field!(data.content, "content");
        add_field!(data.news_type, "type");
        add_field!(data.is_active, "is_active");

        let query = format!(
            "UPDATE news_updates SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, NewsUpdate>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.published_for);
        bind_field!(data.title);
        bind_field!(data.content);
        bind_field!(data.news_type);
        bind_field!(data.is_active);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News update {} not found", id)))
    }

    /// Delete a news update
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM news_updates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("News update {} not found", id)));
        }
        Ok(())
    }
}
