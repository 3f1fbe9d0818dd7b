use chrono::{Duration, Utc};

use crate::server::{
    data::{
        chat::ChatRepository, course::CourseRepository, message::MessageRepository,
        teacher_info::TeacherInfoRepository,
    },
    error::{auth::AuthError, AppError},
    model::{auth::Role, chat::Rating},
    service::chat::ChatService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, chat::MessageFactory},
};

use super::lesson_path;

mod student;
mod teacher;
