//! Travel notification service

use uuid::Uuid;

use crate::{
    error::AppResult, models::travel::TravelNotification, repository::Repository, search,
};

#[derive(Clone)]
pub struct TravelService {
    repository: Repository,
}

impl TravelService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List notifications, newest first, optionally filtered
    pub async fn list(&self, query: Option<&str>) -> AppResult<Vec<TravelNotification>> {
        let notifications = self.repository.travel.list().await?;
        Ok(match query {
            Some(q) if !q.is_empty() => notifications
                .into_iter()
                .filter(|n| {
                    search::any_match(
                        [
                            n.full_name.as_str(),
                            n.email.as_str(),
                            n.destination.as_str(),
                            n.division.as_deref().unwrap_or(""),
                        ],
                        q,
                    )
                })
                .collect(),
            _ => notifications,
        })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<TravelNotification> {
        self.repository.travel.get_by_id(id).await
    }
}
