use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Teacher profile with feedback counters and time metrics.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeacherFullInfoDto {
    pub id: i32,
    pub first_name: String,
    pub good: i32,
    pub improve: i32,
    pub ahtung: i32,
    /// Hours spent on the site.
    pub times: i64,
    /// Mean time to answer a student, in minutes.
    pub average_time: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UpdateTeacherDto {
    pub email: String,
    pub first_name: String,
}
