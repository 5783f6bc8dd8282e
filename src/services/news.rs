//! News update service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::news::{CreateNews, NewsUpdate, UpdateNews},
    repository::Repository,
    search,
    services::changes::{ChangeHub, ChangeOp},
};

const TABLE: &str = "news_updates";

#[derive(Clone)]
pub struct NewsService {
    repository: Repository,
    changes: ChangeHub,
}

impl NewsService {
    pub fn new(repository: Repository, changes: ChangeHub) -> Self {
        Self { repository, changes }
    }

    /// List news, most recent publication month first, optionally filtered
    pub async fn list(&self, query: Option<&str>) -> AppResult<Vec<NewsUpdate>> {
        let news = self.repository.news.list().await?;
        Ok(match query {
            Some(q) if !q.is_empty() => news
                .into_iter()
                .filter(|n| search::any_match([n.title.as_str(), n.content.as_str()], q))
                .collect(),
            _ => news,
        })
    }

    pub async fn create(&self, data: &CreateNews) -> AppResult<NewsUpdate> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let news = self.repository.news.create(data).await?;
        self.changes.publish(TABLE, ChangeOp::Insert);
        Ok(news)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateNews) -> AppResult<NewsUpdate> {
        let news = self.repository.news.update(id, data).await?;
        self.changes.publish(TABLE, ChangeOp::Update);
        Ok(news)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.news.delete(id).await?;
        self.changes.publish(TABLE, ChangeOp::Delete);
        Ok(())
    }
}
