//! Argon2 password hashing.
//!
//! Hashing is CPU bound, so both operations run on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::task;

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password into a PHC string with a random salt.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();

    task::spawn_blocking(move || -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| InternalError::PasswordHash(err.to_string()))?;

        Ok(hash.to_string())
    })
    .await
    .map_err(|err| InternalError::PasswordHash(err.to_string()))?
}

/// Checks a password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` / `Ok(false)` - Whether the password matches
/// - `Err(AppError::Internal(PasswordHash))` - Stored hash is not a valid PHC string
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hash = hash.to_string();

    task::spawn_blocking(move || -> Result<bool, AppError> {
        let parsed = PasswordHash::new(&hash)
            .map_err(|err| InternalError::PasswordHash(err.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(|err| InternalError::PasswordHash(err.to_string()))?
}
