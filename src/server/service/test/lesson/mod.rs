use crate::server::{
    data::{carousel::CarouselRepository, chat::ChatRepository},
    error::AppError,
    model::lesson::LessonContentParam,
    service::lesson::LessonService,
};
use test_utils::{builder::TestBuilder, factory};

use super::{lesson_path, level_path};

mod create;
mod delete;

fn content(name: &str) -> LessonContentParam {
    LessonContentParam {
        name: name.to_string(),
        description: "Irregular verbs".to_string(),
        thesis: vec!["go - went - gone".to_string()],
        task: "Write five sentences".to_string(),
        status_free: false,
    }
}
