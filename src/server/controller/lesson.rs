use axum::{
    body::Body,
    extract::{multipart::MultipartRejection, Multipart, Request, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::{
    model::{
        api::ErrorDto,
        course::{LessonDto, LessonPayloadDto},
    },
    server::{
        controller::level::level_not_found,
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::{
            lesson::{LessonContentParam, LessonPath},
            level::LevelPath,
        },
        service::{lesson::LessonService, video::VideoService},
        state::AppState,
    },
};

/// Tag for grouping lesson and video endpoints in OpenAPI documentation
pub static LESSON_TAG: &str = "lesson";

/// Multipart field holding the uploaded video.
const VIDEO_FIELD: &str = "video";

pub(super) fn lesson_not_found(path: LessonPath) -> AppError {
    AppError::NotFound(format!(
        "Lesson {} not found in course {} section {} level {}",
        path.lesson_id, path.course_id, path.section_id, path.level_id
    ))
}

fn lesson_path((course_id, section_id, level_id, lesson_id): (i32, i32, i32, i32)) -> LessonPath {
    LessonPath {
        course_id,
        section_id,
        level_id,
        lesson_id,
    }
}

/// List the lessons of a level in carousel order.
///
/// Lessons missing from the carousel follow, ordered by id.
#[utoipa::path(
    get,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons/all",
    tag = LESSON_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id")
    ),
    responses(
        (status = 200, description = "Lessons of the level", body = Vec<LessonDto>),
        (status = 404, description = "Level not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lessons(
    State(state): State<AppState>,
    Path((course_id, section_id, level_id)): Path<(i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let level = LevelPath {
        course_id,
        section_id,
        level_id,
    };

    let lessons: Vec<LessonDto> = LessonService::new(&state.db)
        .get_all(level)
        .await?
        .ok_or_else(|| level_not_found(level))?
        .into_iter()
        .map(|lesson| lesson.into_dto())
        .collect();

    Ok(Json(lessons))
}

/// Create a lesson and append it to the level carousel.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new lesson
/// - `400 Bad Request` - Empty text field or no thesis items
/// - `404 Not Found` - Level not found at that path
#[utoipa::path(
    post,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons",
    tag = LESSON_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id")
    ),
    request_body = LessonPayloadDto,
    responses(
        (status = 201, description = "Lesson created", body = LessonDto),
        (status = 400, description = "Invalid lesson content", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Level not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, section_id, level_id)): Path<(i32, i32, i32)>,
    Json(payload): Json<LessonPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let level = LevelPath {
        course_id,
        section_id,
        level_id,
    };
    let content = LessonContentParam::from_dto(payload)?;

    let lesson = LessonService::new(&state.db)
        .create(level, content)
        .await?
        .ok_or_else(|| level_not_found(level))?;

    Ok((StatusCode::CREATED, Json(lesson.into_dto())))
}

/// Get a lesson with links to its neighbours in the carousel.
#[utoipa::path(
    get,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id"),
        ("lesson_id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 200, description = "Lesson found", body = LessonDto),
        (status = 404, description = "Lesson not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(ids): Path<(i32, i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let path = lesson_path(ids);

    let lesson = LessonService::new(&state.db)
        .get(path)
        .await?
        .ok_or_else(|| lesson_not_found(path))?;

    Ok(Json(lesson.into_dto()))
}

/// Replace the content of a lesson.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id"),
        ("lesson_id" = i32, Path, description = "Lesson id")
    ),
    request_body = LessonPayloadDto,
    responses(
        (status = 200, description = "Lesson updated", body = LessonDto),
        (status = 400, description = "Invalid lesson content", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Lesson not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn update_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ids): Path<(i32, i32, i32, i32)>,
    Json(payload): Json<LessonPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let path = lesson_path(ids);
    let content = LessonContentParam::from_dto(payload)?;

    let lesson = LessonService::new(&state.db)
        .update(path, content)
        .await?
        .ok_or_else(|| lesson_not_found(path))?;

    Ok(Json(lesson.into_dto()))
}

/// Delete a lesson with its chats and video.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id"),
        ("lesson_id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Lesson not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn delete_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ids): Path<(i32, i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let path = lesson_path(ids);

    if !LessonService::new(&state.db).delete(path).await? {
        return Err(lesson_not_found(path));
    }
    VideoService::new(&state.video_dir)
        .remove(path.lesson_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload the video of a lesson, replacing any previous one.
///
/// The request is `multipart/form-data` with the file in the `video` field.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons/{lesson_id}/upload",
    tag = LESSON_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id"),
        ("lesson_id" = i32, Path, description = "Lesson id")
    ),
    request_body(content = String, content_type = "multipart/form-data", description = "Video file in the `video` field"),
    responses(
        (status = 204, description = "Video stored"),
        (status = 400, description = "No video field", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Lesson not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn upload_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(ids): Path<(i32, i32, i32, i32)>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;
    let mut multipart = multipart?;

    let path = lesson_path(ids);
    if !LessonService::new(&state.db).exists(path).await? {
        return Err(lesson_not_found(path));
    }

    let videos = VideoService::new(&state.video_dir);
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(VIDEO_FIELD) {
            videos.store(path.lesson_id, field).await?;
            return Ok(StatusCode::NO_CONTENT);
        }
    }

    Err(AppError::BadRequest(format!(
        "Multipart field `{}` is required",
        VIDEO_FIELD
    )))
}

/// Stream the video of a lesson. Range requests are supported.
#[utoipa::path(
    get,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons/{lesson_id}/video",
    tag = LESSON_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id"),
        ("lesson_id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 200, description = "Video file"),
        (status = 206, description = "Requested byte range"),
        (status = 404, description = "Lesson or video not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_video(
    State(state): State<AppState>,
    Path(ids): Path<(i32, i32, i32, i32)>,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    let path = lesson_path(ids);
    if !LessonService::new(&state.db).exists(path).await? {
        return Err(lesson_not_found(path));
    }

    let videos = VideoService::new(&state.video_dir);
    if !videos.exists(path.lesson_id).await? {
        return Err(AppError::NotFound(format!(
            "Lesson {} has no video",
            path.lesson_id
        )));
    }

    let response = ServeFile::new(videos.path(path.lesson_id))
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    Ok(response.map(Body::new))
}
