use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::{Claims, Role},
    util::jwt::JwtKeys,
};

/// Header carrying the access token.
pub const TOKEN_HEADER: &str = "X-api-token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Student,
    Teacher,
    Admin,
    /// Any signed-in user.
    Any,
}

impl Permission {
    fn admits(&self, role: Role) -> bool {
        match self {
            Permission::Student => role == Role::Student,
            Permission::Teacher => role == Role::Teacher,
            Permission::Admin => role == Role::Admin,
            Permission::Any => true,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Checks the request token against the permitted roles.
    ///
    /// Access is granted when the token role matches any of the listed permissions and the
    /// token user still exists.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Claims of the signed-in user
    /// - `Err(AuthError::MissingToken | InvalidToken | EmptyClaims)` - No usable token
    /// - `Err(AuthError::AccessDenied)` - Role not permitted
    /// - `Err(AuthError::UserNotInDatabase)` - User deleted since the token was issued
    pub async fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let claims = self.jwt.verify(request_token(self.headers)?)?;

        if !permissions
            .iter()
            .any(|permission| permission.admits(claims.role))
        {
            return Err(AuthError::AccessDenied(
                claims.user_id,
                format!("role {} is not one of {:?}", claims.role, permissions),
            )
            .into());
        }

        if UserRepository::new(self.db)
            .find_by_id(claims.user_id)
            .await?
            .is_none()
        {
            return Err(AuthError::UserNotInDatabase(claims.user_id).into());
        }

        Ok(claims)
    }
}

/// Raw token from the request headers.
pub fn request_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}
