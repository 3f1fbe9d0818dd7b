use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message_id: i32,
    pub text: String,
    pub role: String,
    pub time_mes: DateTime<Utc>,
    pub first_name: String,
}

/// Chat thread of one student on one lesson.
///
/// `chat_id` is `null` when the student has not written on the lesson yet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ChatDto {
    pub course_id: i32,
    pub section_id: i32,
    pub level_id: i32,
    pub lesson_id: i32,
    pub chat_id: Option<i32>,
    pub student_id: i32,
    pub rating: Option<String>,
    pub ahtung: bool,
    pub messages: Vec<MessageDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SendMessageDto {
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RatingDto {
    /// `good` or `improve`.
    pub rating: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AhtungDto {
    pub ahtung: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StudentChatPreviewDto {
    pub chat_id: i32,
    pub sections_id: i32,
    pub sections_name: String,
    pub lesson_id: i32,
    pub lesson_name: String,
    pub last_message: String,
    pub not_view_message: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeacherChatPreviewDto {
    pub chat_id: i32,
    pub student_id: i32,
    pub student_first_name: String,
    pub sections_id: i32,
    pub sections_name: String,
    pub lesson_id: i32,
    pub lesson_name: String,
    /// Answer deadline: newest message time plus 24 hours.
    pub time: Option<DateTime<Utc>>,
    pub ahtung: bool,
    pub not_view_message: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdminChatPreviewDto {
    pub chat_id: i32,
    pub student_id: i32,
    pub student_first_name: String,
    pub sections_id: i32,
    pub sections_name: String,
    pub lesson_id: i32,
    pub lesson_name: String,
    /// Newest message time.
    pub time: Option<DateTime<Utc>>,
    pub rating: Option<String>,
    pub last_message: String,
    pub not_view_message: u64,
}
