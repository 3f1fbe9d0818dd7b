//! Chat and message factories.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty, unrated chat between a student and the teachers of a lesson.
pub async fn create_chat(
    db: &DatabaseConnection,
    lesson: &entity::lesson::Model,
    student_id: i32,
) -> Result<entity::chat::Model, DbErr> {
    entity::chat::ActiveModel {
        course_id: ActiveValue::Set(lesson.course_id),
        section_id: ActiveValue::Set(lesson.section_id),
        level_id: ActiveValue::Set(lesson.level_id),
        lesson_id: ActiveValue::Set(lesson.id),
        student_id: ActiveValue::Set(student_id),
        ahtung: ActiveValue::Set(false),
        ahtung_teacher_id: ActiveValue::Set(None),
        rating: ActiveValue::Set(None),
        rating_teacher_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for chat messages with a controllable send time.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    chat_id: i32,
    text: String,
    role: String,
    first_name: String,
    not_read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory.
    ///
    /// Defaults: text `"Hello"`, role `"student"`, first name `"Student"`, unread, sent now.
    pub fn new(db: &'a DatabaseConnection, chat_id: i32) -> Self {
        Self {
            db,
            chat_id,
            text: "Hello".to_string(),
            role: "student".to_string(),
            first_name: "Student".to_string(),
            not_read: true,
            created_at: Utc::now(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn not_read(mut self, not_read: bool) -> Self {
        self.not_read = not_read;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            chat_id: ActiveValue::Set(self.chat_id),
            text: ActiveValue::Set(self.text),
            role: ActiveValue::Set(self.role),
            first_name: ActiveValue::Set(self.first_name),
            not_read: ActiveValue::Set(self.not_read),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread message sent now by the given role.
pub async fn create_message(
    db: &DatabaseConnection,
    chat_id: i32,
    role: &str,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, chat_id).role(role).build().await
}
