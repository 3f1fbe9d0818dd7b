use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000005_create_levels_table::Levels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(pk_auto(Lessons::Id))
                    .col(integer(Lessons::CourseId))
                    .col(integer(Lessons::SectionId))
                    .col(integer(Lessons::LevelId))
                    .col(string(Lessons::Name))
                    .col(text(Lessons::Description))
                    .col(json(Lessons::Thesis))
                    .col(text(Lessons::Task))
                    .col(boolean(Lessons::StatusFree).default(false))
                    .col(timestamp_with_time_zone(Lessons::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lessons_level_id")
                            .from(Lessons::Table, Lessons::LevelId)
                            .to(Levels::Table, Levels::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lessons::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lessons {
    Table,
    Id,
    CourseId,
    SectionId,
    LevelId,
    Name,
    Description,
    Thesis,
    Task,
    StatusFree,
    CreatedAt,
}
