use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RequestLog::Table)
                    .if_not_exists()
                    .col(pk_auto(RequestLog::Id))
                    .col(integer(RequestLog::UserId))
                    .col(string(RequestLog::RequestUrl))
                    .col(timestamp_with_time_zone(RequestLog::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_request_log_user_created")
                    .table(RequestLog::Table)
                    .col(RequestLog::UserId)
                    .col(RequestLog::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RequestLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RequestLog {
    Table,
    Id,
    UserId,
    RequestUrl,
    CreatedAt,
}
