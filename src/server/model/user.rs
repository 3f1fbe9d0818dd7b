//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UserDto, UserStatDto},
    server::{error::AppError, model::auth::Role},
};

/// Registered account of any role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub role: Role,
    /// Accumulated time on site in seconds.
    pub times_seconds: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::Internal(UnknownRole))` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity.role.parse::<Role>()?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            role,
            times_seconds: entity.times_seconds,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the user to its public DTO; the password hash never leaves the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            role: self.role.to_string(),
            created_at: self.created_at,
        }
    }

    pub fn into_stat_dto(self) -> UserStatDto {
        UserStatDto {
            email: self.email,
            first_name: self.first_name,
            role: self.role.to_string(),
        }
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub first_name: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated registration input with plain password.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub first_name: String,
    pub password: String,
}

impl RegisterParam {
    /// Normalizes raw input: trims every field and lowercases the email.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Any field is empty after trimming
    pub fn new(email: &str, first_name: &str, password: &str) -> Result<Self, AppError> {
        let param = Self {
            email: normalize_email(email),
            first_name: first_name.trim().to_string(),
            password: password.trim().to_string(),
        };

        if param.email.is_empty() || param.first_name.is_empty() || param.password.is_empty() {
            return Err(AppError::BadRequest(
                "email, first_name and password are required".to_string(),
            ));
        }

        Ok(param)
    }
}

/// Parameters for changing the password of the current user.
#[derive(Debug, Clone)]
pub struct ChangePasswordParam {
    pub user_id: i32,
    pub old_password: String,
    pub new_password: String,
    pub repeat_password: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Parses the `role` query filter of the user listing; empty means every role.
pub fn parse_role_filter(role: &str) -> Result<Option<Role>, AppError> {
    match role.trim() {
        "" => Ok(None),
        other => other
            .parse::<Role>()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("unknown role '{}'", other))),
    }
}
