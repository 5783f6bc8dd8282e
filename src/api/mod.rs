//! API handlers for the HR Feed REST endpoints

pub mod auth;
pub mod equipment;
pub mod events;
pub mod feed;
pub mod health;
pub mod it_requests;
pub mod news;
pub mod openapi;
pub mod reviews;
pub mod travel;
pub mod vacations;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppError, models::session::SessionClaims, AppState};

/// Extractor for an authenticated dashboard session
pub struct AuthenticatedUser(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        // Validate the session token using the secret from configuration
        let claims = SessionClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Optional free-text filter shared by the list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case- and diacritic-insensitive substring filter
    pub q: Option<String>,
}
