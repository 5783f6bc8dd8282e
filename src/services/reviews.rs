//! Review cycle service
//!
//! Advances the three-state review cycle for any reviewable record. The
//! next state is computed from the status the caller saw at click time, not
//! from a server-side read: concurrent clicks from two views race and the
//! last write wins. That is accepted behavior, not a bug to fix.

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::enums::ReviewStatus,
    repository::{reviews::ReviewTable, Repository},
    services::changes::{ChangeHub, ChangeOp},
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
    changes: ChangeHub,
}

impl ReviewsService {
    pub fn new(repository: Repository, changes: ChangeHub) -> Self {
        Self { repository, changes }
    }

    /// Advance the review cycle from the caller-supplied current status and
    /// persist the result as a single-field update. Store failures propagate
    /// untouched; nothing is retried.
    pub async fn advance(
        &self,
        table: ReviewTable,
        id: Uuid,
        current: Option<ReviewStatus>,
    ) -> AppResult<ReviewStatus> {
        let next = ReviewStatus::from_option(current).next();
        self.repository.reviews.set_status(table, id, next).await?;
        self.changes.publish(table.table_name(), ChangeOp::Update);
        Ok(next)
    }
}
