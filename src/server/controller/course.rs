use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDto, CourseInfoForAdminDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        error::AppError,
        extract::{Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::course::{CreateCourseParam, UpdateCourseParam},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

pub(super) fn course_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Course {} not found", id))
}

/// List all courses ordered by id.
#[utoipa::path(
    get,
    path = "/courses/all",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses: Vec<CourseDto> = CatalogService::new(&state.db)
        .get_courses()
        .await?
        .into_iter()
        .map(|course| course.into_dto())
        .collect();

    Ok(Json(courses))
}

/// Create a course with no sale.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Course with `total_price` equal to `cost`
/// - `400 Bad Request` - Empty name or negative cost
#[utoipa::path(
    post,
    path = "/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseDto),
        (status = 400, description = "Invalid course", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn create_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let course = CatalogService::new(&state.db)
        .create_course(CreateCourseParam {
            name: payload.name,
            cost: payload.cost,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CatalogService::new(&state.db)
        .get_course(course_id)
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    Ok(Json(course.into_dto()))
}

/// Update name and pricing of a course.
///
/// Sale is a percentage taken as its absolute value; the total price is recomputed.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = CourseDto),
        (status = 400, description = "Invalid course", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn update_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let course = CatalogService::new(&state.db)
        .update_course(UpdateCourseParam {
            id: course_id,
            name: payload.name,
            cost: payload.cost,
            sale: payload.sale,
        })
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    Ok(Json(course.into_dto()))
}

/// Delete a course with everything inside it.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !CatalogService::new(&state.db).delete_course(course_id).await? {
        return Err(course_not_found(course_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Courses with enrolment and homework counters.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/admin/courses/all",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses with counters", body = Vec<CourseInfoForAdminDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_admin_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let courses: Vec<CourseInfoForAdminDto> = CatalogService::new(&state.db)
        .get_courses()
        .await?
        .into_iter()
        .map(|course| course.into_admin_dto())
        .collect();

    Ok(Json(courses))
}
