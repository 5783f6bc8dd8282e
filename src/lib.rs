//! HR Feed - Internal HR Administration Server
//!
//! REST backend for the HR feed dashboard: vacation requests, travel
//! notifications, IT equipment requests, news announcements, and the IT
//! equipment inventory with straight-line depreciation.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod depreciation;
pub mod error;
pub mod models;
pub mod repository;
pub mod search;
pub mod services;
pub mod workflow;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
