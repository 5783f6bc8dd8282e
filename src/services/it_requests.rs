//! IT equipment request service

use uuid::Uuid;

use crate::{
    error::AppResult, models::it_request::ItEquipmentRequest, repository::Repository, search,
};

#[derive(Clone)]
pub struct ItRequestsService {
    repository: Repository,
}

impl ItRequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List requests, newest first, optionally filtered
    pub async fn list(&self, query: Option<&str>) -> AppResult<Vec<ItEquipmentRequest>> {
        let requests = self.repository.it_requests.list().await?;
        Ok(match query {
            Some(q) if !q.is_empty() => requests
                .into_iter()
                .filter(|request| {
                    search::any_match(
                        [
                            request.requester.as_str(),
                            request.email.as_str(),
                            request.equipment.as_str(),
                        ],
                        q,
                    )
                })
                .collect(),
            _ => requests,
        })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ItEquipmentRequest> {
        self.repository.it_requests.get_by_id(id).await
    }
}
