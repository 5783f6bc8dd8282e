//! Repository layer for database operations

pub mod equipment;
pub mod it_requests;
pub mod news;
pub mod reviews;
pub mod travel;
pub mod vacations;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub vacations: vacations::VacationsRepository,
    pub travel: travel::TravelRepository,
    pub it_requests: it_requests::ItRequestsRepository,
    pub news: news::NewsRepository,
    pub reviews: reviews::ReviewsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            vacations: vacations::VacationsRepository::new(pool.clone()),
            travel: travel::TravelRepository::new(pool.clone()),
            it_requests: it_requests::ItRequestsRepository::new(pool.clone()),
            news: news::NewsRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            pool,
        }
    }
}
