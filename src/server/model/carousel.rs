//! Lesson order of a level.
//!
//! Every level keeps the ids of its lessons in presentation order. New lessons are appended
//! at the end; navigation between neighbouring lessons and the order of lesson listings both
//! follow this sequence.

use std::collections::HashMap;

use entity::lesson_carousel::LessonIds;

use crate::server::model::{lesson::Lesson, level::LevelPath};

#[derive(Debug, Clone, PartialEq)]
pub struct LessonCarousel {
    pub level: LevelPath,
    lesson_ids: Vec<i32>,
}

impl LessonCarousel {
    pub fn new(level: LevelPath) -> Self {
        Self {
            level,
            lesson_ids: Vec::new(),
        }
    }

    pub fn from_entity(entity: entity::lesson_carousel::Model) -> Self {
        Self {
            level: LevelPath {
                course_id: entity.course_id,
                section_id: entity.section_id,
                level_id: entity.level_id,
            },
            lesson_ids: entity.lesson_ids.0,
        }
    }

    pub fn to_stored(&self) -> LessonIds {
        LessonIds(self.lesson_ids.clone())
    }

    pub fn lesson_ids(&self) -> &[i32] {
        &self.lesson_ids
    }

    pub fn is_empty(&self) -> bool {
        self.lesson_ids.is_empty()
    }

    /// Appends a lesson; a lesson already present keeps its position.
    pub fn push(&mut self, lesson_id: i32) {
        if !self.lesson_ids.contains(&lesson_id) {
            self.lesson_ids.push(lesson_id);
        }
    }

    /// Removes a lesson, returning whether it was present.
    pub fn remove(&mut self, lesson_id: i32) -> bool {
        let before = self.lesson_ids.len();
        self.lesson_ids.retain(|id| *id != lesson_id);
        before != self.lesson_ids.len()
    }

    fn position(&self, lesson_id: i32) -> Option<usize> {
        self.lesson_ids.iter().position(|id| *id == lesson_id)
    }

    pub fn next_after(&self, lesson_id: i32) -> Option<i32> {
        let index = self.position(lesson_id)?;
        self.lesson_ids.get(index + 1).copied()
    }

    pub fn previous_before(&self, lesson_id: i32) -> Option<i32> {
        let index = self.position(lesson_id)?;
        index
            .checked_sub(1)
            .and_then(|previous| self.lesson_ids.get(previous))
            .copied()
    }

    /// Sorts lessons by carousel position.
    ///
    /// Lessons missing from the carousel follow in ascending id order.
    pub fn order(&self, mut lessons: Vec<Lesson>) -> Vec<Lesson> {
        let positions: HashMap<i32, usize> = self
            .lesson_ids
            .iter()
            .enumerate()
            .map(|(index, id)| (*id, index))
            .collect();

        lessons.sort_by_key(|lesson| {
            (
                positions.get(&lesson.id).copied().unwrap_or(usize::MAX),
                lesson.id,
            )
        });

        lessons
    }
}
