//! HS256 token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::auth::{Claims, Role},
};

/// Signing keys and token lifetime, shared through application state.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Signs a token for the user valid for the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::Internal(TokenSigning))` - Signing failed
    pub fn issue(&self, user_id: i32, role: Role) -> Result<String, AppError> {
        let claims = Claims {
            user_id,
            role,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| InternalError::TokenSigning(err).into())
    }

    /// Decodes and validates a token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature, expiry and role are valid and a user id is present
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or malformed claims
    /// - `Err(AuthError::EmptyClaims)` - Token carries user id 0
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding,
            &Validation::new(Algorithm::HS256),
        )?;

        if data.claims.user_id == 0 {
            return Err(AuthError::EmptyClaims);
        }

        Ok(data.claims)
    }
}
