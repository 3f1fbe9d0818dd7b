use crate::server::{
    data::lesson::LessonRepository,
    model::{
        lesson::{LessonContentParam, LessonPath},
        level::LevelPath,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update;

fn content(name: &str) -> LessonContentParam {
    LessonContentParam {
        name: name.to_string(),
        description: "What we cover".to_string(),
        thesis: vec!["First".to_string(), "Second".to_string()],
        task: "Solve it".to_string(),
        status_free: true,
    }
}

fn level_path(level: &entity::level::Model) -> LevelPath {
    LevelPath {
        course_id: level.course_id,
        section_id: level.section_id,
        level_id: level.id,
    }
}
