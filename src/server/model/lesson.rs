//! Lesson domain model, navigation and parameters.

use crate::{
    model::course::{LessonDto, LessonPayloadDto},
    server::{
        error::AppError,
        model::{carousel::LessonCarousel, course::required_name, level::LevelPath},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub course_id: i32,
    pub section_id: i32,
    pub level_id: i32,
    pub name: String,
    pub description: String,
    pub thesis: Vec<String>,
    pub task: String,
    pub status_free: bool,
}

impl Lesson {
    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            section_id: entity.section_id,
            level_id: entity.level_id,
            name: entity.name,
            description: entity.description,
            thesis: entity.thesis.0,
            task: entity.task,
            status_free: entity.status_free,
        }
    }

    pub fn path(&self) -> LessonPath {
        LessonPath {
            course_id: self.course_id,
            section_id: self.section_id,
            level_id: self.level_id,
            lesson_id: self.id,
        }
    }

    /// Converts to a DTO without navigation links.
    pub fn into_dto(self) -> LessonDto {
        self.into_dto_with_navigation(None, None)
    }

    pub fn into_dto_with_navigation(self, next: Option<i32>, previous: Option<i32>) -> LessonDto {
        let level = self.path().level();

        LessonDto {
            id: self.id,
            course_id: self.course_id,
            section_id: self.section_id,
            level_id: self.level_id,
            name: self.name,
            lesson_description: self.description,
            lesson_thesis: self.thesis,
            lesson_task: self.task,
            status_free: self.status_free,
            next_lesson_id: next,
            next_lesson_url: next.map(|id| level.lesson_url(id)),
            previous_lesson_id: previous,
            previous_lesson_url: previous.map(|id| level.lesson_url(id)),
        }
    }
}

/// A lesson together with its neighbours in the level carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonWithNavigation {
    pub lesson: Lesson,
    pub next: Option<i32>,
    pub previous: Option<i32>,
}

impl LessonWithNavigation {
    pub fn new(lesson: Lesson, carousel: Option<&LessonCarousel>) -> Self {
        let (next, previous) = match carousel {
            Some(carousel) => (
                carousel.next_after(lesson.id),
                carousel.previous_before(lesson.id),
            ),
            None => (None, None),
        };

        Self {
            lesson,
            next,
            previous,
        }
    }

    pub fn into_dto(self) -> LessonDto {
        self.lesson
            .into_dto_with_navigation(self.next, self.previous)
    }
}

/// Full address of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonPath {
    pub course_id: i32,
    pub section_id: i32,
    pub level_id: i32,
    pub lesson_id: i32,
}

impl LessonPath {
    pub fn level(&self) -> LevelPath {
        LevelPath {
            course_id: self.course_id,
            section_id: self.section_id,
            level_id: self.level_id,
        }
    }
}

impl LevelPath {
    /// Public URL of a lesson inside this level.
    pub fn lesson_url(&self, lesson_id: i32) -> String {
        format!(
            "/courses/{}/sections/{}/levels/{}/lessons/{}",
            self.course_id, self.section_id, self.level_id, lesson_id
        )
    }
}

/// Validated lesson content used for both creation and update.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonContentParam {
    pub name: String,
    pub description: String,
    pub thesis: Vec<String>,
    pub task: String,
    pub status_free: bool,
}

impl LessonContentParam {
    /// Trims the payload and rejects missing content.
    ///
    /// Blank thesis items are dropped; at least one must remain.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Name, description or task empty, or no thesis items
    pub fn from_dto(dto: LessonPayloadDto) -> Result<Self, AppError> {
        let name = required_name(&dto.name, "Lesson")?;
        let description = dto.lesson_description.trim().to_string();
        let task = dto.lesson_task.trim().to_string();
        let thesis: Vec<String> = dto
            .lesson_thesis
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        if description.is_empty() || task.is_empty() || thesis.is_empty() {
            return Err(AppError::BadRequest(
                "lesson_description, lesson_thesis and lesson_task are required".to_string(),
            ));
        }

        Ok(Self {
            name,
            description,
            thesis,
            task,
            status_free: dto.status_free,
        })
    }
}
