use crate::server::model::{lesson::LessonPath, level::LevelPath, section::SectionPath};

mod account;
mod activity;
mod catalog;
mod chat;
mod lesson;
mod recovery;
mod teacher;

const SECRET: &str = "test-secret";

fn section_path(section: &entity::section::Model) -> SectionPath {
    SectionPath {
        course_id: section.course_id,
        section_id: section.id,
    }
}

fn level_path(level: &entity::level::Model) -> LevelPath {
    LevelPath {
        course_id: level.course_id,
        section_id: level.section_id,
        level_id: level.id,
    }
}

fn lesson_path(lesson: &entity::lesson::Model) -> LessonPath {
    LessonPath {
        course_id: lesson.course_id,
        section_id: lesson.section_id,
        level_id: lesson.level_id,
        lesson_id: lesson.id,
    }
}
