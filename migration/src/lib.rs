pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_teacher_info_table;
mod m20260301_000003_create_courses_table;
mod m20260301_000004_create_sections_table;
mod m20260301_000005_create_levels_table;
mod m20260301_000006_create_lessons_table;
mod m20260301_000007_create_lesson_carousel_table;
mod m20260301_000008_create_section_teacher_table;
mod m20260301_000009_create_chats_table;
mod m20260301_000010_create_messages_table;
mod m20260301_000011_create_recovery_codes_table;
mod m20260301_000012_create_request_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_teacher_info_table::Migration),
            Box::new(m20260301_000003_create_courses_table::Migration),
            Box::new(m20260301_000004_create_sections_table::Migration),
            Box::new(m20260301_000005_create_levels_table::Migration),
            Box::new(m20260301_000006_create_lessons_table::Migration),
            Box::new(m20260301_000007_create_lesson_carousel_table::Migration),
            Box::new(m20260301_000008_create_section_teacher_table::Migration),
            Box::new(m20260301_000009_create_chats_table::Migration),
            Box::new(m20260301_000010_create_messages_table::Migration),
            Box::new(m20260301_000011_create_recovery_codes_table::Migration),
            Box::new(m20260301_000012_create_request_log_table::Migration),
        ]
    }
}
