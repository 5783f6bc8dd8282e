//! Session token claims for the shared-password gate

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Subject recorded in every session token; the dashboard has a single
/// shared identity, not per-user accounts.
const SESSION_SUBJECT: &str = "hr-dashboard";

/// JWT claims for a dashboard session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// New session expiring after the configured number of hours
    pub fn new(expiration_hours: u64) -> Self {
        let now = chrono::Utc::now();
        let expires = now + chrono::Duration::hours(expiration_hours as i64);
        Self {
            sub: SESSION_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        }
    }

    /// Sign the claims into a bearer token
    pub fn to_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Validate a bearer token and extract the claims
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let claims = SessionClaims::new(24);
        let token = claims.to_token("test-secret").unwrap();
        let decoded = SessionClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.sub, SESSION_SUBJECT);
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = SessionClaims::new(24).to_token("test-secret").unwrap();
        assert!(SessionClaims::from_token(&token, "other-secret").is_err());
    }
}
