use crate::server::{
    data::chat::ChatRepository,
    error::AppError,
    model::{chat::Rating, lesson::LessonPath},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_sections;
mod set_rating;
