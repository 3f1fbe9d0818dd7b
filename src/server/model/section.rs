//! Section domain model.

use crate::model::course::SectionDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
}

impl Section {
    pub fn from_entity(entity: entity::section::Model) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> SectionDto {
        SectionDto {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
        }
    }
}

/// Address of a section inside its course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPath {
    pub course_id: i32,
    pub section_id: i32,
}
