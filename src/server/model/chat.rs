//! Lesson chats between a student and the teachers of a section.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::chat::{ChatDto, MessageDto},
    server::{
        error::AppError,
        model::{auth::Role, lesson::LessonPath, teacher::TeacherCounter},
    },
};

/// Time a teacher has to answer the newest message.
pub const ANSWER_DEADLINE_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i32,
    pub path: LessonPath,
    pub student_id: i32,
    pub ahtung: bool,
    pub ahtung_teacher_id: Option<i32>,
    pub rating: Option<Rating>,
    pub rating_teacher_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// # Returns
    /// - `Err(AppError::InternalError)` - Stored rating is neither good nor improve
    pub fn from_entity(entity: entity::chat::Model) -> Result<Self, AppError> {
        let rating = entity
            .rating
            .as_deref()
            .map(Rating::from_str)
            .transpose()
            .map_err(|err| AppError::InternalError(format!("chat {}: {}", entity.id, err)))?;

        Ok(Self {
            id: entity.id,
            path: LessonPath {
                course_id: entity.course_id,
                section_id: entity.section_id,
                level_id: entity.level_id,
                lesson_id: entity.lesson_id,
            },
            student_id: entity.student_id,
            ahtung: entity.ahtung,
            ahtung_teacher_id: entity.ahtung_teacher_id,
            rating,
            rating_teacher_id: entity.rating_teacher_id,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub chat_id: i32,
    pub text: String,
    pub role: Role,
    pub first_name: String,
    pub not_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Result<Self, AppError> {
        let role = entity.role.parse::<Role>()?;

        Ok(Self {
            id: entity.id,
            chat_id: entity.chat_id,
            text: entity.text,
            role,
            first_name: entity.first_name,
            not_read: entity.not_read,
            created_at: entity.created_at,
        })
    }

    /// Teachers and admins answer on the teacher side of a chat.
    pub fn is_from_student(&self) -> bool {
        self.role == Role::Student
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            message_id: self.id,
            text: self.text,
            role: self.role.to_string(),
            time_mes: self.created_at,
            first_name: self.first_name,
        }
    }
}

/// Homework verdict a teacher leaves on a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Good,
    Improve,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Improve => "improve",
        }
    }

    pub fn counter(&self) -> TeacherCounter {
        match self {
            Self::Good => TeacherCounter::Good,
            Self::Improve => TeacherCounter::Improve,
        }
    }
}

impl FromStr for Rating {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "good" => Ok(Self::Good),
            "improve" => Ok(Self::Improve),
            other => Err(AppError::BadRequest(format!(
                "rating must be good or improve, got '{}'",
                other
            ))),
        }
    }
}

/// A chat as shown to a reader, possibly before its first message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatThread {
    pub path: LessonPath,
    pub student_id: i32,
    pub chat: Option<Chat>,
    pub messages: Vec<Message>,
}

impl ChatThread {
    pub fn empty(path: LessonPath, student_id: i32) -> Self {
        Self {
            path,
            student_id,
            chat: None,
            messages: Vec::new(),
        }
    }

    pub fn with_messages(chat: Chat, messages: Vec<Message>) -> Self {
        Self {
            path: chat.path,
            student_id: chat.student_id,
            chat: Some(chat),
            messages,
        }
    }

    pub fn into_dto(self) -> ChatDto {
        let (chat_id, rating, ahtung) = match &self.chat {
            Some(chat) => (
                Some(chat.id),
                chat.rating.map(|rating| rating.as_str().to_string()),
                chat.ahtung,
            ),
            None => (None, None, false),
        };

        ChatDto {
            course_id: self.path.course_id,
            section_id: self.path.section_id,
            level_id: self.path.level_id,
            lesson_id: self.path.lesson_id,
            chat_id,
            student_id: self.student_id,
            rating,
            ahtung,
            messages: self.messages.into_iter().map(Message::into_dto).collect(),
        }
    }
}

/// Trims message text and rejects empty messages.
pub fn message_text(text: &str) -> Result<String, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("message text is required".to_string()));
    }
    Ok(text.to_string())
}

/// New message to append to a chat.
#[derive(Debug, Clone)]
pub struct CreateMessageParam {
    pub chat_id: i32,
    pub text: String,
    pub role: Role,
    pub first_name: String,
}

/// Which side of a chat is reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reader {
    Student,
    Teacher,
}

impl Reader {
    /// Whether a message counts as unread for this reader.
    pub fn is_incoming(&self, message: &Message) -> bool {
        match self {
            Self::Student => !message.is_from_student(),
            Self::Teacher => message.is_from_student(),
        }
    }

    /// Roles whose messages this reader marks as read when opening a chat.
    pub fn incoming_roles(&self) -> &'static [Role] {
        match self {
            Self::Student => &[Role::Teacher, Role::Admin],
            Self::Teacher => &[Role::Student],
        }
    }
}

/// Aggregated state of a chat's messages used by preview lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatActivity {
    pub newest: Option<Message>,
    pub unread: u64,
}

impl ChatActivity {
    /// Summarizes messages ordered oldest first.
    pub fn from_messages(messages: Vec<Message>, reader: Reader) -> Self {
        let unread = messages
            .iter()
            .filter(|message| message.not_read && reader.is_incoming(message))
            .count() as u64;

        Self {
            newest: messages.into_iter().last(),
            unread,
        }
    }

    /// Text of the newest message when it is a teacher answer, otherwise empty.
    pub fn last_teacher_answer(&self) -> String {
        match &self.newest {
            Some(message) if !message.is_from_student() => message.text.clone(),
            _ => String::new(),
        }
    }

    pub fn last_message(&self) -> String {
        self.newest
            .as_ref()
            .map(|message| message.text.clone())
            .unwrap_or_default()
    }

    pub fn newest_time(&self) -> Option<DateTime<Utc>> {
        self.newest.as_ref().map(|message| message.created_at)
    }

    /// When the teacher is expected to have answered.
    pub fn answer_deadline(&self) -> Option<DateTime<Utc>> {
        self.newest_time()
            .map(|time| time + Duration::hours(ANSWER_DEADLINE_HOURS))
    }
}
