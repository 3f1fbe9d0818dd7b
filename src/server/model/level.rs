//! Level domain model.

use crate::{model::course::LevelDto, server::model::section::SectionPath};

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: i32,
    pub course_id: i32,
    pub section_id: i32,
    pub name: String,
}

impl Level {
    pub fn from_entity(entity: entity::level::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            section_id: entity.section_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> LevelDto {
        LevelDto {
            id: self.id,
            course_id: self.course_id,
            section_id: self.section_id,
            name: self.name,
        }
    }
}

/// Address of a level inside its course and section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPath {
    pub course_id: i32,
    pub section_id: i32,
    pub level_id: i32,
}

impl LevelPath {
    pub fn section(&self) -> SectionPath {
        SectionPath {
            course_id: self.course_id,
            section_id: self.section_id,
        }
    }
}
