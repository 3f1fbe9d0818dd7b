use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000003_create_courses_table::Courses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(pk_auto(Sections::Id))
                    .col(integer(Sections::CourseId))
                    .col(string(Sections::Name))
                    .col(timestamp_with_time_zone(Sections::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Sections::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sections_course_id")
                            .from(Sections::Table, Sections::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sections {
    Table,
    Id,
    CourseId,
    Name,
    CreatedAt,
    UpdatedAt,
}
