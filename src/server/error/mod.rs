//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every error body has
//! the shape `{"error": "<message>"}`.

pub mod auth;
pub mod config;
pub mod internal;
pub mod mail;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, mail::MailError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication, authorization or credential error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping (400/403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest (VK, Telegram).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Outgoing mail could not be built or delivered.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed or oversized multipart upload stream.
    ///
    /// Answers with the status axum assigns to the failure, e.g. 413 past the body limit.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Request without a readable multipart body.
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    /// Missing, malformed or oversized JSON body.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path parameters that do not match the route.
    ///
    /// A segment that fails to parse results in 404, like a route that does not exist.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Malformed query string.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Unexpected internal state.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant and path segments that fail to parse
/// - Variable - For extractor rejections and multipart errors, the status axum assigns
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, MailErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::MultipartErr(err) => rejection_response(err.status(), err.body_text()),
            Self::MultipartRejection(err) => rejection_response(err.status(), err.body_text()),
            Self::JsonRejection(err) => rejection_response(err.status(), err.body_text()),
            Self::PathRejection(PathRejection::FailedToDeserializePathParams(err)) => {
                rejection_response(StatusCode::NOT_FOUND, err.body_text())
            }
            Self::PathRejection(err) => rejection_response(err.status(), err.body_text()),
            Self::QueryRejection(err) => rejection_response(err.status(), err.body_text()),
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn rejection_response(status: StatusCode, message: String) -> Response {
    if status.is_server_error() {
        return InternalServerError(message).into_response();
    }

    (status, Json(ErrorDto { error: message })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        internal_error_response()
    }
}

/// Generic 500 response body shared by error conversion and panic recovery.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
