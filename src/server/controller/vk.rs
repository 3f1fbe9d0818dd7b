use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::api::{ErrorDto, TokenDto},
    server::{
        config::VkConfig,
        error::AppError,
        extract::{Json, Query},
        service::vk::VkService,
        state::AppState,
    },
};

/// Tag for grouping VK login endpoints in OpenAPI documentation
pub static VK_TAG: &str = "vk";

#[derive(Deserialize, IntoParams)]
pub struct CallbackParams {
    /// Authorization code issued by VK
    pub code: String,
}

fn vk_config(state: &AppState) -> Result<&VkConfig, AppError> {
    state
        .vk
        .as_ref()
        .ok_or_else(|| AppError::NotFound("VK login is not configured".to_string()))
}

/// Redirect to the VK authorization dialog.
#[utoipa::path(
    get,
    path = "/vk/login",
    tag = VK_TAG,
    responses(
        (status = 307, description = "Redirect to VK"),
        (status = 404, description = "VK login is not configured", body = ErrorDto)
    ),
)]
pub async fn vk_login(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let vk = vk_config(&state)?;

    let url = VkService::new(&state.db, &state.http_client, vk, &state.jwt, &state.mailer)
        .login_url()?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete VK login.
///
/// Signs in the user with the VK account's email, creating a student on first login.
#[utoipa::path(
    get,
    path = "/vk/callback",
    tag = VK_TAG,
    params(CallbackParams),
    responses(
        (status = 200, description = "Signed in", body = TokenDto),
        (status = 400, description = "VK rejected the login", body = ErrorDto),
        (status = 404, description = "VK login is not configured", body = ErrorDto),
        (status = 500, description = "VK unreachable or database error", body = ErrorDto)
    ),
)]
pub async fn vk_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let vk = vk_config(&state)?;

    let token = VkService::new(&state.db, &state.http_client, vk, &state.jwt, &state.mailer)
        .callback(&params.code)
        .await?;

    Ok(Json(TokenDto { token }))
}
