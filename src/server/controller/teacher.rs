use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, IdDto},
        chat::{AdminChatPreviewDto, ChatDto},
        course::SectionDto,
        teacher::{TeacherFullInfoDto, UpdateTeacherDto},
        user::RegisterUserDto,
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::{teacher::UpdateTeacherParam, user::RegisterParam},
        service::{chat::ChatService, preview::PreviewService, teacher::TeacherService},
        state::AppState,
    },
};

/// Tag for grouping teacher administration endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

fn teacher_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Teacher {} not found", id))
}

/// Register a teacher account.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Id of the new teacher
/// - `400 Bad Request` - Missing field or email already registered
#[utoipa::path(
    post,
    path = "/users/register/teacher",
    tag = TEACHER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Teacher registered", body = IdDto),
        (status = 400, description = "Missing field or email already exists", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn register_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = RegisterParam::new(&payload.email, &payload.first_name, &payload.password)?;
    let id = TeacherService::new(&state.db).register(param).await?;

    Ok((StatusCode::CREATED, Json(IdDto { id })))
}

/// Get a teacher with feedback counters and time metrics.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/users/teacher/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher user id")
    ),
    responses(
        (status = 200, description = "Teacher found", body = TeacherFullInfoDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let profile = TeacherService::new(&state.db)
        .get_profile(id)
        .await?
        .ok_or_else(|| teacher_not_found(id))?;

    Ok(Json(profile.into_dto()))
}

/// Update a teacher's email and first name.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/users/teacher/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher user id")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 204, description = "Teacher updated"),
        (status = 400, description = "Missing field or email already exists", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let updated = TeacherService::new(&state.db)
        .update(UpdateTeacherParam {
            id,
            email: payload.email,
            first_name: payload.first_name,
        })
        .await?;

    if !updated {
        return Err(teacher_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a teacher with metrics and section assignments.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/users/teacher/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher user id")
    ),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !TeacherService::new(&state.db).delete(id).await? {
        return Err(teacher_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List every teacher with metrics.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/admin/teachers/all",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Teachers ordered by id", body = Vec<TeacherFullInfoDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let teachers: Vec<TeacherFullInfoDto> = TeacherService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|profile| profile.into_dto())
        .collect();

    Ok(Json(teachers))
}

/// Sections assigned to a teacher.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/users/teacher/{id}/sections",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher user id")
    ),
    responses(
        (status = 200, description = "Assigned sections", body = Vec<SectionDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_teacher_sections(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let sections: Vec<SectionDto> = TeacherService::new(&state.db)
        .get_sections(id)
        .await?
        .ok_or_else(|| teacher_not_found(id))?
        .into_iter()
        .map(|section| section.into_dto())
        .collect();

    Ok(Json(sections))
}

/// Assign a section to a teacher. Assigning twice is a no-op.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/users/teacher/{id}/sections/{section_id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher user id"),
        ("section_id" = i32, Path, description = "Section id")
    ),
    responses(
        (status = 204, description = "Section assigned"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher or section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn assign_teacher_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, section_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    TeacherService::new(&state.db)
        .assign_section(id, section_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a section from a teacher.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/users/teacher/{id}/sections/{section_id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher user id"),
        ("section_id" = i32, Path, description = "Section id")
    ),
    responses(
        (status = 204, description = "Section unassigned"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher or section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn unassign_teacher_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, section_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    TeacherService::new(&state.db)
        .unassign_section(id, section_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Chats of a teacher's sections as seen by an admin.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/users/teacher/{id}/chats",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher user id")
    ),
    responses(
        (status = 200, description = "Chat previews", body = Vec<AdminChatPreviewDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_admin_teacher_chats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let previews: Vec<AdminChatPreviewDto> = PreviewService::new(&state.db)
        .for_admin(id)
        .await?
        .ok_or_else(|| teacher_not_found(id))?
        .into_iter()
        .map(|preview| preview.into_admin_dto())
        .collect();

    Ok(Json(previews))
}

/// One chat of a teacher's sections, read flags untouched.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/users/teacher/{id}/chat/{chat_id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher user id"),
        ("chat_id" = i32, Path, description = "Chat id")
    ),
    responses(
        (status = 200, description = "Chat with messages", body = ChatDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher or chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_admin_teacher_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, chat_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let thread = ChatService::new(&state.db).admin_chat(id, chat_id).await?;

    Ok(Json(thread.into_dto()))
}
