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
                    .table(LessonCarousel::Table)
                    .if_not_exists()
                    .col(integer(LessonCarousel::LevelId).primary_key())
                    .col(integer(LessonCarousel::CourseId))
                    .col(integer(LessonCarousel::SectionId))
                    .col(json(LessonCarousel::LessonIds))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_carousel_level_id")
                            .from(LessonCarousel::Table, LessonCarousel::LevelId)
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
            .drop_table(Table::drop().table(LessonCarousel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonCarousel {
    Table,
    LevelId,
    CourseId,
    SectionId,
    LessonIds,
}
