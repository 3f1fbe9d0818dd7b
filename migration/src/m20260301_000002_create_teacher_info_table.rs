use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeacherInfo::Table)
                    .if_not_exists()
                    .col(integer(TeacherInfo::UserId).primary_key())
                    .col(integer(TeacherInfo::Good).default(0))
                    .col(integer(TeacherInfo::Improve).default(0))
                    .col(integer(TeacherInfo::Ahtung).default(0))
                    .col(big_integer(TeacherInfo::AnswerTimeSeconds).default(0))
                    .col(integer(TeacherInfo::AnswerCount).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_info_user_id")
                            .from(TeacherInfo::Table, TeacherInfo::UserId)
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
            .drop_table(Table::drop().table(TeacherInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeacherInfo {
    Table,
    UserId,
    Good,
    Improve,
    Ahtung,
    AnswerTimeSeconds,
    AnswerCount,
}
