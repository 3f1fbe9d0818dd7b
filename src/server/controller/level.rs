use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        course::{LevelDto, NamePayloadDto},
    },
    server::{
        controller::section::section_not_found,
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::{level::LevelPath, section::SectionPath},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping level endpoints in OpenAPI documentation
pub static LEVEL_TAG: &str = "level";

pub(super) fn level_not_found(path: LevelPath) -> AppError {
    AppError::NotFound(format!(
        "Level {} not found in course {} section {}",
        path.level_id, path.course_id, path.section_id
    ))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}/sections/{section_id}/levels/all",
    tag = LEVEL_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id")
    ),
    responses(
        (status = 200, description = "Levels of the section", body = Vec<LevelDto>),
        (status = 404, description = "Section not found in that course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_levels(
    State(state): State<AppState>,
    Path((course_id, section_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let section = SectionPath {
        course_id,
        section_id,
    };

    let levels: Vec<LevelDto> = CatalogService::new(&state.db)
        .get_levels(section)
        .await?
        .ok_or_else(|| section_not_found(section))?
        .into_iter()
        .map(|level| level.into_dto())
        .collect();

    Ok(Json(levels))
}

/// Create a level in a section.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/courses/{course_id}/sections/{section_id}/levels",
    tag = LEVEL_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id")
    ),
    request_body = NamePayloadDto,
    responses(
        (status = 201, description = "Level created", body = LevelDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Section not found in that course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn create_level(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, section_id)): Path<(i32, i32)>,
    Json(payload): Json<NamePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let section = SectionPath {
        course_id,
        section_id,
    };

    let level = CatalogService::new(&state.db)
        .create_level(section, &payload.name)
        .await?
        .ok_or_else(|| section_not_found(section))?;

    Ok((StatusCode::CREATED, Json(level.into_dto())))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}",
    tag = LEVEL_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id")
    ),
    responses(
        (status = 200, description = "Level found", body = LevelDto),
        (status = 404, description = "Level not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_level(
    State(state): State<AppState>,
    Path((course_id, section_id, level_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let path = LevelPath {
        course_id,
        section_id,
        level_id,
    };

    let level = CatalogService::new(&state.db)
        .get_level(path)
        .await?
        .ok_or_else(|| level_not_found(path))?;

    Ok(Json(level.into_dto()))
}

/// Rename a level.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}",
    tag = LEVEL_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id")
    ),
    request_body = NamePayloadDto,
    responses(
        (status = 200, description = "Level renamed", body = LevelDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Level not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn update_level(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, section_id, level_id)): Path<(i32, i32, i32)>,
    Json(payload): Json<NamePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let path = LevelPath {
        course_id,
        section_id,
        level_id,
    };

    let level = CatalogService::new(&state.db)
        .rename_level(path, &payload.name)
        .await?
        .ok_or_else(|| level_not_found(path))?;

    Ok(Json(level.into_dto()))
}

/// Delete a level with its lessons and carousel.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}",
    tag = LEVEL_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id")
    ),
    responses(
        (status = 204, description = "Level deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Level not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn delete_level(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, section_id, level_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let path = LevelPath {
        course_id,
        section_id,
        level_id,
    };

    if !CatalogService::new(&state.db).delete_level(path).await? {
        return Err(level_not_found(path));
    }

    Ok(StatusCode::NO_CONTENT)
}
