use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_users_table::Users, m20260301_000004_create_sections_table::Sections,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SectionTeacher::Table)
                    .if_not_exists()
                    .col(integer(SectionTeacher::SectionId))
                    .col(integer(SectionTeacher::TeacherId))
                    .primary_key(
                        Index::create()
                            .col(SectionTeacher::SectionId)
                            .col(SectionTeacher::TeacherId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_teacher_section_id")
                            .from(SectionTeacher::Table, SectionTeacher::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_teacher_teacher_id")
                            .from(SectionTeacher::Table, SectionTeacher::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SectionTeacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SectionTeacher {
    Table,
    SectionId,
    TeacherId,
}
