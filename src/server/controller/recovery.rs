use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        user::{CheckCodeDto, RecoveryCodeDto, RecoveryEmailDto, RecoveryNewPasswordDto},
    },
    server::{
        error::AppError, extract::Json, service::recovery::RecoveryService, state::AppState,
    },
};

/// Tag for grouping password recovery endpoints in OpenAPI documentation
pub static RECOVERY_TAG: &str = "recovery";

/// Mail a recovery code.
///
/// Replaces any earlier code for the email.
#[utoipa::path(
    post,
    path = "/password/recovery",
    tag = RECOVERY_TAG,
    request_body = RecoveryEmailDto,
    responses(
        (status = 200, description = "Code sent"),
        (status = 400, description = "Email not found", body = ErrorDto),
        (status = 500, description = "Mail or database error", body = ErrorDto)
    ),
)]
pub async fn send_recovery_code(
    State(state): State<AppState>,
    Json(payload): Json<RecoveryEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    RecoveryService::new(&state.db, &state.mailer, state.recovery_code_ttl_minutes)
        .send_code(&payload.email)
        .await?;

    Ok(StatusCode::OK)
}

/// Check a recovery code without using it.
#[utoipa::path(
    post,
    path = "/password/recovery/check",
    tag = RECOVERY_TAG,
    request_body = RecoveryCodeDto,
    responses(
        (status = 200, description = "Whether the code is valid", body = CheckCodeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_recovery_code(
    State(state): State<AppState>,
    Json(payload): Json<RecoveryCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let code = RecoveryService::new(&state.db, &state.mailer, state.recovery_code_ttl_minutes)
        .check_code(&payload.email, &payload.code)
        .await?;

    Ok(Json(CheckCodeDto { code }))
}

/// Set a new password with a recovery code.
#[utoipa::path(
    post,
    path = "/password/recovery/new",
    tag = RECOVERY_TAG,
    request_body = RecoveryNewPasswordDto,
    responses(
        (status = 200, description = "Password replaced"),
        (status = 400, description = "Invalid code or passwords do not match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_new_password(
    State(state): State<AppState>,
    Json(payload): Json<RecoveryNewPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    RecoveryService::new(&state.db, &state.mailer, state.recovery_code_ttl_minutes)
        .reset_password(
            &payload.email,
            &payload.code,
            &payload.new_password,
            &payload.repeat_password,
        )
        .await?;

    Ok(StatusCode::OK)
}
