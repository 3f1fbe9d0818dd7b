//! Lesson and level carousel factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::{lesson::Thesis, lesson_carousel::LessonIds};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a lesson inside the given level without touching the level carousel.
///
/// Defaults: name `"Lesson {id}"`, a short description, two thesis items, a task and
/// `status_free = false`.
pub async fn create_lesson(
    db: &DatabaseConnection,
    level: &entity::level::Model,
) -> Result<entity::lesson::Model, DbErr> {
    let id = next_id();
    entity::lesson::ActiveModel {
        course_id: ActiveValue::Set(level.course_id),
        section_id: ActiveValue::Set(level.section_id),
        level_id: ActiveValue::Set(level.id),
        name: ActiveValue::Set(format!("Lesson {}", id)),
        description: ActiveValue::Set(format!("Description {}", id)),
        thesis: ActiveValue::Set(Thesis(vec![
            "First point".to_string(),
            "Second point".to_string(),
        ])),
        task: ActiveValue::Set(format!("Task {}", id)),
        status_free: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates the carousel row of a level with the given lesson order.
pub async fn create_carousel(
    db: &DatabaseConnection,
    level: &entity::level::Model,
    lesson_ids: Vec<i32>,
) -> Result<entity::lesson_carousel::Model, DbErr> {
    entity::lesson_carousel::ActiveModel {
        level_id: ActiveValue::Set(level.id),
        course_id: ActiveValue::Set(level.course_id),
        section_id: ActiveValue::Set(level.section_id),
        lesson_ids: ActiveValue::Set(LessonIds(lesson_ids)),
    }
    .insert(db)
    .await
}
