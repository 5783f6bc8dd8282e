//! Business logic services

pub mod auth;
pub mod changes;
pub mod equipment;
pub mod feed;
pub mod it_requests;
pub mod news;
pub mod reviews;
pub mod travel;
pub mod vacations;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub equipment: equipment::EquipmentService,
    pub vacations: vacations::VacationsService,
    pub travel: travel::TravelService,
    pub it_requests: it_requests::ItRequestsService,
    pub news: news::NewsService,
    pub feed: feed::FeedService,
    pub reviews: reviews::ReviewsService,
    pub changes: changes::ChangeHub,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        let changes = changes::ChangeHub::new();
        Self {
            auth: auth::AuthService::new(auth_config),
            equipment: equipment::EquipmentService::new(repository.clone(), changes.clone()),
            vacations: vacations::VacationsService::new(repository.clone(), changes.clone()),
            travel: travel::TravelService::new(repository.clone()),
            it_requests: it_requests::ItRequestsService::new(repository.clone()),
            news: news::NewsService::new(repository.clone(), changes.clone()),
            feed: feed::FeedService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository, changes.clone()),
            changes,
        }
    }
}
