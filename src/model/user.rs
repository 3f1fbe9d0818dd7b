use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Compact user listing entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserStatDto {
    pub email: String,
    pub first_name: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub first_name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AuthorizeDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
    pub repeat_password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RecoveryEmailDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RecoveryCodeDto {
    pub email: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RecoveryNewPasswordDto {
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub repeat_password: String,
}

/// Result of a recovery code check.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CheckCodeDto {
    pub code: bool,
}
