//! Shared helper utilities for factory methods.
//!
//! Common utilities used across all factory modules, including id generation and
//! shortcuts for creating entities together with their parents.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a lesson together with its course, section, level and level carousel.
///
/// The carousel holds exactly the created lesson.
///
/// # Returns
/// - `Ok((course, section, level, lesson))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lesson_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::course::Model,
        entity::section::Model,
        entity::level::Model,
        entity::lesson::Model,
    ),
    DbErr,
> {
    let course = crate::factory::course::create_course(db).await?;
    let section = crate::factory::section::create_section(db, course.id).await?;
    let level = crate::factory::level::create_level(db, course.id, section.id).await?;
    let lesson = crate::factory::lesson::create_lesson(db, &level).await?;
    crate::factory::lesson::create_carousel(db, &level, vec![lesson.id]).await?;

    Ok((course, section, level, lesson))
}

/// Creates a chat for a fresh lesson and student, with the teacher assigned to the section.
///
/// # Returns
/// - `Ok((student, teacher, lesson, chat))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_chat_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::lesson::Model,
        entity::chat::Model,
    ),
    DbErr,
> {
    let (_, section, _, lesson) = create_lesson_with_dependencies(db).await?;
    let student = crate::factory::user::create_user(db).await?;
    let (teacher, _) = crate::factory::teacher::create_teacher(db).await?;
    crate::factory::section::assign_teacher(db, section.id, teacher.id).await?;
    let chat = crate::factory::chat::create_chat(db, &lesson, student.id).await?;

    Ok((student, teacher, lesson, chat))
}
