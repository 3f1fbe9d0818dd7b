use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_users_table::Users, m20260301_000006_create_lessons_table::Lessons,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chats::Table)
                    .if_not_exists()
                    .col(pk_auto(Chats::Id))
                    .col(integer(Chats::CourseId))
                    .col(integer(Chats::SectionId))
                    .col(integer(Chats::LevelId))
                    .col(integer(Chats::LessonId))
                    .col(integer(Chats::StudentId))
                    .col(boolean(Chats::Ahtung).default(false))
                    .col(integer_null(Chats::AhtungTeacherId))
                    .col(string_null(Chats::Rating))
                    .col(integer_null(Chats::RatingTeacherId))
                    .col(timestamp_with_time_zone(Chats::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_lesson_id")
                            .from(Chats::Table, Chats::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_student_id")
                            .from(Chats::Table, Chats::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chats_lesson_student")
                    .table(Chats::Table)
                    .col(Chats::LessonId)
                    .col(Chats::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chats {
    Table,
    Id,
    CourseId,
    SectionId,
    LevelId,
    LessonId,
    StudentId,
    Ahtung,
    AhtungTeacherId,
    Rating,
    RatingTeacherId,
    CreatedAt,
}
