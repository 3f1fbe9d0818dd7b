use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk_auto(Courses::Id))
                    .col(string(Courses::Name))
                    .col(integer(Courses::Cost).default(0))
                    .col(integer(Courses::Sale).default(0))
                    .col(integer(Courses::TotalPrice).default(0))
                    .col(integer(Courses::Users).default(0))
                    .col(integer(Courses::HomeworkCount).default(0))
                    .col(timestamp_with_time_zone(Courses::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Courses::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Name,
    Cost,
    Sale,
    TotalPrice,
    Users,
    HomeworkCount,
    CreatedAt,
    UpdatedAt,
}
