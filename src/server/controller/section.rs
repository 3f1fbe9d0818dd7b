use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        course::{NamePayloadDto, SectionDto},
    },
    server::{
        controller::course::course_not_found,
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::section::SectionPath,
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping section endpoints in OpenAPI documentation
pub static SECTION_TAG: &str = "section";

pub(super) fn section_not_found(path: SectionPath) -> AppError {
    AppError::NotFound(format!(
        "Section {} not found in course {}",
        path.section_id, path.course_id
    ))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}/sections/all",
    tag = SECTION_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Sections of the course", body = Vec<SectionDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sections(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let sections: Vec<SectionDto> = CatalogService::new(&state.db)
        .get_sections(course_id)
        .await?
        .ok_or_else(|| course_not_found(course_id))?
        .into_iter()
        .map(|section| section.into_dto())
        .collect();

    Ok(Json(sections))
}

/// Create a section in a course.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/courses/{course_id}/sections",
    tag = SECTION_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    request_body = NamePayloadDto,
    responses(
        (status = 201, description = "Section created", body = SectionDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn create_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
    Json(payload): Json<NamePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let section = CatalogService::new(&state.db)
        .create_section(course_id, &payload.name)
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    Ok((StatusCode::CREATED, Json(section.into_dto())))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}/sections/{section_id}",
    tag = SECTION_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id")
    ),
    responses(
        (status = 200, description = "Section found", body = SectionDto),
        (status = 404, description = "Section not found in that course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_section(
    State(state): State<AppState>,
    Path((course_id, section_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let path = SectionPath {
        course_id,
        section_id,
    };

    let section = CatalogService::new(&state.db)
        .get_section(path)
        .await?
        .ok_or_else(|| section_not_found(path))?;

    Ok(Json(section.into_dto()))
}

/// Rename a section.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/courses/{course_id}/sections/{section_id}",
    tag = SECTION_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id")
    ),
    request_body = NamePayloadDto,
    responses(
        (status = 200, description = "Section renamed", body = SectionDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Section not found in that course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn update_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, section_id)): Path<(i32, i32)>,
    Json(payload): Json<NamePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let path = SectionPath {
        course_id,
        section_id,
    };

    let section = CatalogService::new(&state.db)
        .rename_section(path, &payload.name)
        .await?
        .ok_or_else(|| section_not_found(path))?;

    Ok(Json(section.into_dto()))
}

/// Delete a section with its levels, lessons and teacher assignments.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/courses/{course_id}/sections/{section_id}",
    tag = SECTION_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id")
    ),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Section not found in that course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn delete_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, section_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let path = SectionPath {
        course_id,
        section_id,
    };

    if !CatalogService::new(&state.db).delete_section(path).await? {
        return Err(section_not_found(path));
    }

    Ok(StatusCode::NO_CONTENT)
}
