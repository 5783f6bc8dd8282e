//! Shared-password gate
//!
//! The dashboard has a single shared access password; a successful login
//! mints a signed session token. There are no per-user accounts.

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::session::SessionClaims,
};

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Verify the shared password and mint a session token.
    /// Returns the token and its lifetime in seconds.
    pub fn login(&self, password: &str) -> AppResult<(String, u64)> {
        if password != self.config.shared_password {
            return Err(AppError::Authentication("Invalid password".to_string()));
        }
        let claims = SessionClaims::new(self.config.jwt_expiration_hours);
        let token = claims
            .to_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))?;
        Ok((token, self.config.jwt_expiration_hours * 3600))
    }
}
