use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Funding::Table)
                    .if_not_exists()
                    .col(pk_auto(Funding::Id))
                    .col(big_integer(Funding::Amount))
                    .col(string(Funding::DonorName))
                    .col(string(Funding::DonorEmail))
                    .col(string_null(Funding::TransactionId))
                    .col(
                        timestamp_with_time_zone(Funding::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Funding::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Funding {
    Table,
    Id,
    Amount,
    DonorName,
    DonorEmail,
    TransactionId,
    CreatedAt,
}
