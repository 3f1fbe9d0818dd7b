use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000004_create_sections_table::Sections;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Levels::Table)
                    .if_not_exists()
                    .col(pk_auto(Levels::Id))
                    .col(integer(Levels::CourseId))
                    .col(integer(Levels::SectionId))
                    .col(string(Levels::Name))
                    .col(timestamp_with_time_zone(Levels::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_levels_section_id")
                            .from(Levels::Table, Levels::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_levels_course_section")
                    .table(Levels::Table)
                    .col(Levels::CourseId)
                    .col(Levels::SectionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Levels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Levels {
    Table,
    Id,
    CourseId,
    SectionId,
    Name,
    CreatedAt,
}
