//! Section factory and teacher assignment helper.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a section named `"Section {id}"` inside the given course.
pub async fn create_section(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::section::Model, DbErr> {
    let now = Utc::now();
    entity::section::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        name: ActiveValue::Set(format!("Section {}", next_id())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Assigns a teacher to a section.
pub async fn assign_teacher(
    db: &DatabaseConnection,
    section_id: i32,
    teacher_id: i32,
) -> Result<entity::section_teacher::Model, DbErr> {
    entity::section_teacher::ActiveModel {
        section_id: ActiveValue::Set(section_id),
        teacher_id: ActiveValue::Set(teacher_id),
    }
    .insert(db)
    .await
}
