use crate::server::{
    data::{
        carousel::CarouselRepository, chat::ChatRepository, course::CourseRepository,
        lesson::LessonRepository, level::LevelRepository, message::MessageRepository,
        section::SectionRepository, section_teacher::SectionTeacherRepository,
    },
    error::AppError,
    model::{
        course::{CreateCourseParam, UpdateCourseParam},
        section::SectionPath,
    },
    service::catalog::CatalogService,
};
use test_utils::{builder::TestBuilder, factory};

use super::{level_path, section_path};

mod course;
