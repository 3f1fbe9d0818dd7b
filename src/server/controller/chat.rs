use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        chat::{
            AhtungDto, ChatDto, MessageDto, RatingDto, SendMessageDto, StudentChatPreviewDto,
            TeacherChatPreviewDto,
        },
    },
    server::{
        controller::lesson::lesson_not_found,
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::{chat::Rating, lesson::LessonPath},
        service::{chat::ChatService, preview::PreviewService},
        state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Open the signed-in student's chat on a lesson.
///
/// Teacher messages are marked read. Before the first message the chat has no id and no
/// messages.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons/{lesson_id}/chat",
    tag = CHAT_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id"),
        ("lesson_id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 200, description = "Chat with messages", body = ChatDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 404, description = "Lesson not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_lesson_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, section_id, level_id, lesson_id)): Path<(i32, i32, i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Student])
        .await?;

    let path = LessonPath {
        course_id,
        section_id,
        level_id,
        lesson_id,
    };

    let thread = ChatService::new(&state.db)
        .student_thread(path, claims.user_id)
        .await?
        .ok_or_else(|| lesson_not_found(path))?;

    Ok(Json(thread.into_dto()))
}

/// Write to the lesson chat, creating it on the first message.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    post,
    path = "/courses/{course_id}/sections/{section_id}/levels/{level_id}/lessons/{lesson_id}/chat",
    tag = CHAT_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id"),
        ("section_id" = i32, Path, description = "Section id"),
        ("level_id" = i32, Path, description = "Level id"),
        ("lesson_id" = i32, Path, description = "Lesson id")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 404, description = "Lesson not found at that path", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn send_lesson_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((course_id, section_id, level_id, lesson_id)): Path<(i32, i32, i32, i32)>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Student])
        .await?;

    let path = LessonPath {
        course_id,
        section_id,
        level_id,
        lesson_id,
    };

    let message = ChatService::new(&state.db)
        .student_send(path, claims.user_id, &payload.text)
        .await?
        .ok_or_else(|| lesson_not_found(path))?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Chats of the signed-in student.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    get,
    path = "/student/chat/all",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Chat previews", body = Vec<StudentChatPreviewDto>),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_student_chats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Student])
        .await?;

    let previews: Vec<StudentChatPreviewDto> = PreviewService::new(&state.db)
        .for_student(claims.user_id)
        .await?
        .into_iter()
        .map(|preview| preview.into_student_dto())
        .collect();

    Ok(Json(previews))
}

/// # Access Control
/// - `Student` owning the chat
#[utoipa::path(
    get,
    path = "/student/chat/{chat_id}",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat id")
    ),
    responses(
        (status = 200, description = "Chat with messages", body = ChatDto),
        (status = 403, description = "Chat of another student", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_student_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Student])
        .await?;

    let thread = ChatService::new(&state.db)
        .student_chat(chat_id, claims.user_id)
        .await?;

    Ok(Json(thread.into_dto()))
}

/// # Access Control
/// - `Student` owning the chat
#[utoipa::path(
    post,
    path = "/student/chat/{chat_id}",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat id")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 403, description = "Chat of another student", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn send_student_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Student])
        .await?;

    let message = ChatService::new(&state.db)
        .student_reply(chat_id, claims.user_id, &payload.text)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Chats of the sections assigned to the signed-in teacher.
///
/// `time` is the answer deadline, a day after the newest message.
///
/// # Access Control
/// - `Teacher`
#[utoipa::path(
    get,
    path = "/teacher/chat/all",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "Chat previews", body = Vec<TeacherChatPreviewDto>),
        (status = 403, description = "Not a teacher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_teacher_chats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Teacher])
        .await?;

    let previews: Vec<TeacherChatPreviewDto> = PreviewService::new(&state.db)
        .for_teacher(claims.user_id)
        .await?
        .into_iter()
        .map(|preview| preview.into_teacher_dto())
        .collect();

    Ok(Json(previews))
}

/// Open a chat and mark student messages read.
///
/// # Access Control
/// - `Teacher` assigned to the chat's section
#[utoipa::path(
    get,
    path = "/teacher/chat/{chat_id}",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat id")
    ),
    responses(
        (status = 200, description = "Chat with messages", body = ChatDto),
        (status = 403, description = "Chat outside assigned sections", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_teacher_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Teacher])
        .await?;

    let thread = ChatService::new(&state.db)
        .teacher_chat(chat_id, claims.user_id)
        .await?;

    Ok(Json(thread.into_dto()))
}

/// Answer a student.
///
/// When the newest message is the student's, the wait is added to the teacher's answer time.
///
/// # Access Control
/// - `Teacher` assigned to the chat's section
#[utoipa::path(
    post,
    path = "/teacher/chat/{chat_id}",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat id")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 403, description = "Chat outside assigned sections", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn send_teacher_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Teacher])
        .await?;

    let message = ChatService::new(&state.db)
        .teacher_reply(chat_id, claims.user_id, &payload.text)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Toggle the escalation flag of a chat.
///
/// # Access Control
/// - `Teacher` assigned to the chat's section
#[utoipa::path(
    post,
    path = "/teacher/chat/{chat_id}/ahtung",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat id")
    ),
    responses(
        (status = 200, description = "New flag value", body = AhtungDto),
        (status = 403, description = "Chat outside assigned sections", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn toggle_ahtung(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Teacher])
        .await?;

    let ahtung = ChatService::new(&state.db)
        .toggle_ahtung(chat_id, claims.user_id)
        .await?;

    Ok(Json(AhtungDto { ahtung }))
}

/// Rate the homework of a chat as `good` or `improve`.
///
/// # Access Control
/// - `Teacher` assigned to the chat's section
#[utoipa::path(
    post,
    path = "/teacher/chat/{chat_id}/rating",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "Chat id")
    ),
    request_body = RatingDto,
    responses(
        (status = 200, description = "Recorded rating", body = RatingDto),
        (status = 400, description = "Unknown rating", body = ErrorDto),
        (status = 403, description = "Chat outside assigned sections", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn rate_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(chat_id): Path<i32>,
    Json(payload): Json<RatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Teacher])
        .await?;

    let rating: Rating = payload.rating.parse()?;

    let chat = ChatService::new(&state.db)
        .rate(chat_id, claims.user_id, rating)
        .await?;

    Ok(Json(RatingDto {
        rating: chat.rating.unwrap_or(rating).as_str().to_string(),
    }))
}
