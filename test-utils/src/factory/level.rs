//! Level factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a level named `"Level {id}"` inside the given course section.
pub async fn create_level(
    db: &DatabaseConnection,
    course_id: i32,
    section_id: i32,
) -> Result<entity::level::Model, DbErr> {
    entity::level::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        section_id: ActiveValue::Set(section_id),
        name: ActiveValue::Set(format!("Level {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
