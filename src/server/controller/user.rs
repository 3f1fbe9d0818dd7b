use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, TokenDto},
        user::{AuthorizeDto, ChangePasswordDto, RegisterUserDto, UserDto, UserStatDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path, Query},
        middleware::auth::{AuthGuard, Permission},
        model::user::{parse_role_filter, ChangePasswordParam, RegisterParam},
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
pub struct RoleFilter {
    /// `student`, `teacher`, `admin` or empty for everyone
    #[serde(default)]
    pub role: String,
}

/// Register a student account.
///
/// Email is trimmed and lowercased, the other fields trimmed; all are required.
///
/// # Returns
/// - `200 OK` - Token of the new student
/// - `400 Bad Request` - Missing field or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Student registered", body = TokenDto),
        (status = 400, description = "Missing field or email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam::new(&payload.email, &payload.first_name, &payload.password)?;

    let token = AccountService::new(&state.db, &state.jwt)
        .register(param)
        .await?;

    Ok(Json(TokenDto { token }))
}

/// Sign in with email and password.
///
/// # Returns
/// - `200 OK` - Token of the user
/// - `403 Forbidden` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/users/auth",
    tag = USER_TAG,
    request_body = AuthorizeDto,
    responses(
        (status = 200, description = "Signed in", body = TokenDto),
        (status = 403, description = "Password is incorrect", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authorize(
    State(state): State<AppState>,
    Json(payload): Json<AuthorizeDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = AccountService::new(&state.db, &state.jwt)
        .authorize(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenDto { token }))
}

/// List users, optionally of one role.
///
/// # Access Control
/// - `Teacher`, `Admin`
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(RoleFilter),
    responses(
        (status = 200, description = "Users ordered by id", body = Vec<UserStatDto>),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 403, description = "Not a teacher or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<RoleFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Teacher, Permission::Admin])
        .await?;

    let role = parse_role_filter(&filter.role)?;

    let users = AccountService::new(&state.db, &state.jwt)
        .get_all(role)
        .await?;

    let users: Vec<UserStatDto> = users.into_iter().map(|user| user.into_stat_dto()).collect();

    Ok(Json(users))
}

/// Get a user by id.
///
/// # Access Control
/// - Any signed-in user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 403, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Any])
        .await?;

    let user = AccountService::new(&state.db, &state.jwt)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(user.into_dto()))
}

/// Change the password of the signed-in user.
///
/// # Access Control
/// - Any signed-in user; the token decides whose password changes
#[utoipa::path(
    post,
    path = "/password/change",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Passwords do not match", body = ErrorDto),
        (status = 403, description = "Not signed in or old password incorrect", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Any])
        .await?;

    AccountService::new(&state.db, &state.jwt)
        .change_password(ChangePasswordParam {
            user_id: claims.user_id,
            old_password: payload.old_password,
            new_password: payload.new_password,
            repeat_password: payload.repeat_password,
        })
        .await?;

    Ok(StatusCode::OK)
}
