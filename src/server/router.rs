//! HTTP routes, OpenAPI document and the middleware stack.

use std::any::Any;

use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, response::Response, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        chat::*, course::*, health::*, lesson::*, level::*, recovery::*, section::*, teacher::*,
        user::*, vk::*,
    },
    error::internal_error_response,
    middleware::{activity::track_activity, auth::TOKEN_HEADER},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tarasova School API",
        description = "Courses, lessons, homework chats and teacher metrics of the online school"
    ),
    modifiers(&TokenSecurity)
)]
struct ApiDoc;

/// Registers the `api_token` scheme referenced by authenticated endpoints.
struct TokenSecurity;

impl Modify for TokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(TOKEN_HEADER))),
        );
    }
}

/// Builds the application router.
///
/// Swagger UI is served at `/api/docs`. Video uploads get their own body limit, every other
/// route keeps axum's default.
pub fn router(state: AppState) -> Router {
    let uploads = OpenApiRouter::new()
        .routes(routes!(upload_video))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(ping))
        // Accounts
        .routes(routes!(register))
        .routes(routes!(authorize))
        .routes(routes!(get_users))
        .routes(routes!(get_user))
        .routes(routes!(change_password))
        .routes(routes!(send_recovery_code))
        .routes(routes!(check_recovery_code))
        .routes(routes!(set_new_password))
        .routes(routes!(vk_login))
        .routes(routes!(vk_callback))
        // Teachers
        .routes(routes!(register_teacher))
        .routes(routes!(get_teacher, update_teacher, delete_teacher))
        .routes(routes!(get_teachers))
        .routes(routes!(get_teacher_sections))
        .routes(routes!(assign_teacher_section, unassign_teacher_section))
        .routes(routes!(get_admin_teacher_chats))
        .routes(routes!(get_admin_teacher_chat))
        // Catalog
        .routes(routes!(get_courses))
        .routes(routes!(create_course))
        .routes(routes!(get_course, update_course, delete_course))
        .routes(routes!(get_admin_courses))
        .routes(routes!(get_sections))
        .routes(routes!(create_section))
        .routes(routes!(get_section, update_section, delete_section))
        .routes(routes!(get_levels))
        .routes(routes!(create_level))
        .routes(routes!(get_level, update_level, delete_level))
        .routes(routes!(get_lessons))
        .routes(routes!(create_lesson))
        .routes(routes!(get_lesson, update_lesson, delete_lesson))
        .routes(routes!(get_video))
        .merge(uploads)
        // Chats
        .routes(routes!(get_lesson_chat, send_lesson_message))
        .routes(routes!(get_student_chats))
        .routes(routes!(get_student_chat, send_student_message))
        .routes(routes!(get_teacher_chats))
        .routes(routes!(get_teacher_chat, send_teacher_message))
        .routes(routes!(toggle_ahtung))
        .routes(routes!(rate_chat))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(from_fn_with_state(state.clone(), track_activity))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };

    tracing::error!("Request handler panicked: {}", details);

    internal_error_response()
}
