use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tastetrail_core::models::user::Role;

use crate::error::AuthError;

/// Claims carried by a TasteTrail bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    #[serde(default)]
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8], ttl_hours: u32) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_seconds: i64::from(ttl_hours) * 3600,
        }
    }

    /// Issue a token valid from now for the configured lifetime.
    pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String, AuthError> {
        self.issue_at(user_id, role, jiff::Timestamp::now().as_second())
    }

    /// Issue a token as if the current time were `issued_at` (unix seconds).
    pub fn issue_at(&self, user_id: Uuid, role: Role, issued_at: i64) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id,
            role,
            iat: issued_at,
            exp: issued_at + self.ttl_seconds,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "bearer token rejected");
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken(e.to_string()),
                }
            })
    }
}
