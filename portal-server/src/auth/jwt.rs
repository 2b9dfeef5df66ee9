//! JWT token service
//!
//! HS256 tokens with a fixed lifetime set at issuance. The secret is
//! injected at construction; changing it invalidates every outstanding
//! token.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried in every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal ID (user or employee)
    pub sub: i64,
    /// Login identifier (email for admins, login_id for employees)
    pub login: String,
    /// Role tag: "admin" or "employee"
    pub role: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration (unix seconds)
    pub exp: i64,
}

/// JWT errors. Callers surface both kinds identically to clients so the
/// response does not reveal whether a token expired or was tampered with.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Token service holding pre-built keys
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    /// Issue a token for a principal. Expiry is fixed at issuance; there is
    /// no refresh.
    pub fn issue(&self, principal_id: i64, login: &str, role: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: principal_id,
            login: login.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Verify and decode a token.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    _ => JwtError::Invalid,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// Authenticated principal, inserted into request extensions by the
/// authentication middleware. Handlers may only trust `id` for
/// created_by/updated_by attribution.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub login: String,
    pub role: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            login: claims.login,
            role: claims.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_verify_round_trip() {
        let service = JwtService::new("test-secret", 24);
        let token = service.issue(42, "admin@example.com", "admin").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.login, "admin@example.com");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let issuer = JwtService::new("secret-a", 24);
        let verifier = JwtService::new("secret-b", 24);
        let token = issuer.issue(1, "x", "admin").unwrap();

        assert!(matches!(verifier.verify(&token), Err(JwtError::Invalid)));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Negative expiry puts exp in the past at issuance.
        let service = JwtService::new("test-secret", -1);
        let token = service.issue(1, "x", "admin").unwrap();

        assert!(matches!(service.verify(&token), Err(JwtError::Expired)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let service = JwtService::new("test-secret", 24);
        assert!(matches!(
            service.verify("not-a-token"),
            Err(JwtError::Invalid)
        ));
    }
}
