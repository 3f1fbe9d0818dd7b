use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
    pub cost: i32,
    pub sale: i32,
    pub total_price: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCourseDto {
    pub name: String,
    pub cost: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateCourseDto {
    pub name: String,
    pub cost: i32,
    #[serde(default)]
    pub sale: i32,
}

/// Course with the counters shown on the admin dashboard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CourseInfoForAdminDto {
    pub id: i32,
    pub name: String,
    pub cost: i32,
    pub users: i32,
    /// Rated homework count.
    pub dz: i32,
    pub sale: i32,
    pub total: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SectionDto {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LevelDto {
    pub id: i32,
    pub course_id: i32,
    pub section_id: i32,
    pub name: String,
}

/// Name-only payload used to create or rename sections and levels.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NamePayloadDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub course_id: i32,
    pub section_id: i32,
    pub level_id: i32,
    pub name: String,
    pub lesson_description: String,
    pub lesson_thesis: Vec<String>,
    pub lesson_task: String,
    pub status_free: bool,
    pub next_lesson_id: Option<i32>,
    pub next_lesson_url: Option<String>,
    pub previous_lesson_id: Option<i32>,
    pub previous_lesson_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LessonPayloadDto {
    pub name: String,
    pub lesson_description: String,
    pub lesson_thesis: Vec<String>,
    pub lesson_task: String,
    #[serde(default)]
    pub status_free: bool,
}
