use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `X-api-token` header.
    #[error("Missing X-api-token header")]
    MissingToken,

    /// Token failed signature, expiry or claims validation.
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token claims decoded but describe no usable identity (user id 0).
    #[error("Token claims carry no user")]
    EmptyClaims,

    /// Token is valid but its role is not permitted for the route.
    ///
    /// # Fields
    /// - User id from the token
    /// - Description of the denied action for logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Token is valid but the user has since been deleted.
    #[error("User {0} from token no longer exists")]
    UserNotInDatabase(i32),

    /// Login or password change with a wrong password, or login with an unknown email.
    #[error("Password is incorrect")]
    IncorrectPassword,

    /// Registration or profile update with an email already in use.
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// New password and its repetition differ.
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,

    /// Recovery requested for an unknown email.
    #[error("Email not found")]
    EmailNotFound,

    /// Recovery code missing, wrong or expired.
    #[error("Recovery code is invalid")]
    InvalidRecoveryCode,

    /// VK rejected the authorization code or returned no email.
    #[error("VK login failed: {0}")]
    VkLoginFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token and permission failures answer 403 with a short message and are logged at debug
/// level; credential validation failures answer 400 or 403 with a message the client can
/// show to the user.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::EmptyClaims => {
                (StatusCode::FORBIDDEN, "jwt token is broken")
            }
            Self::AccessDenied(..) | Self::UserNotInDatabase(_) => {
                (StatusCode::FORBIDDEN, "permission denied")
            }
            Self::IncorrectPassword => (StatusCode::FORBIDDEN, "password is incorrect"),
            Self::EmailAlreadyExists => (StatusCode::BAD_REQUEST, "email already exists"),
            Self::PasswordsDoNotMatch => (StatusCode::BAD_REQUEST, "passwords do not match"),
            Self::EmailNotFound => (StatusCode::BAD_REQUEST, "email not found"),
            Self::InvalidRecoveryCode => (StatusCode::BAD_REQUEST, "recovery code is invalid"),
            Self::VkLoginFailed(_) => (StatusCode::BAD_REQUEST, "failed to log in with VK"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
