//! Teacher factory creating a teacher user together with its `teacher_info` row.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::user::UserFactory;

/// Creates a teacher user with zeroed metrics.
///
/// # Returns
/// - `Ok((user, teacher_info))` - Created user and metrics row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_teacher(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::teacher_info::Model), DbErr> {
    let user = UserFactory::new(db).role("teacher").build().await?;
    let info = create_teacher_info(db, user.id).await?;

    Ok((user, info))
}

/// Inserts a zeroed `teacher_info` row for an existing user.
pub async fn create_teacher_info(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::teacher_info::Model, DbErr> {
    entity::teacher_info::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        good: ActiveValue::Set(0),
        improve: ActiveValue::Set(0),
        ahtung: ActiveValue::Set(0),
        answer_time_seconds: ActiveValue::Set(0),
        answer_count: ActiveValue::Set(0),
    }
    .insert(db)
    .await
}
