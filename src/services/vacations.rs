//! Vacation request service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::vacation::{VacationRequest, WorkflowStepUpdate},
    repository::Repository,
    search,
    services::changes::{ChangeHub, ChangeOp},
};

const TABLE: &str = "vacation_requests";

#[derive(Clone)]
pub struct VacationsService {
    repository: Repository,
    changes: ChangeHub,
}

impl VacationsService {
    pub fn new(repository: Repository, changes: ChangeHub) -> Self {
        Self { repository, changes }
    }

    /// List requests, newest first, optionally filtered
    pub async fn list(&self, query: Option<&str>) -> AppResult<Vec<VacationRequest>> {
        let requests = self.repository.vacations.list().await?;
        Ok(match query {
            Some(q) if !q.is_empty() => requests
                .into_iter()
                .filter(|request| {
                    search::any_match(
                        [
                            request.full_name.as_str(),
                            request.email.as_str(),
                            request.status_while_away.as_deref().unwrap_or(""),
                        ],
                        q,
                    )
                })
                .collect(),
            _ => requests,
        })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<VacationRequest> {
        self.repository.vacations.get_by_id(id).await
    }

    /// Set a single workflow step and return the refreshed record
    pub async fn update_step(
        &self,
        id: Uuid,
        update: &WorkflowStepUpdate,
    ) -> AppResult<VacationRequest> {
        let request = self.repository.vacations.update_step(id, update).await?;
        self.changes.publish(TABLE, ChangeOp::Update);
        Ok(request)
    }
}
