use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DonationRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(DonationRequest::Id))
                    .col(string(DonationRequest::RequesterEmail))
                    .col(string(DonationRequest::RequesterName))
                    .col(string(DonationRequest::RecipientName))
                    .col(string(DonationRequest::HospitalName))
                    .col(string(DonationRequest::FullAddress))
                    .col(string(DonationRequest::BloodGroup))
                    .col(string(DonationRequest::District))
                    .col(string(DonationRequest::Upazila))
                    .col(string(DonationRequest::DonationDate))
                    .col(string(DonationRequest::DonationTime))
                    .col(text(DonationRequest::RequestMessage))
                    .col(string(DonationRequest::Status).default("pending"))
                    .col(string_null(DonationRequest::DonorName))
                    .col(string_null(DonationRequest::DonorEmail))
                    .col(timestamp_with_time_zone_null(DonationRequest::DonatedAt))
                    .col(
                        timestamp_with_time_zone(DonationRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_donation_request_status")
                    .table(DonationRequest::Table)
                    .col(DonationRequest::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_donation_request_requester_email")
                    .table(DonationRequest::Table)
                    .col(DonationRequest::RequesterEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_donation_request_created_at")
                    .table(DonationRequest::Table)
                    .col(DonationRequest::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DonationRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DonationRequest {
    Table,
    Id,
    RequesterEmail,
    RequesterName,
    RecipientName,
    HospitalName,
    FullAddress,
    BloodGroup,
    District,
    Upazila,
    DonationDate,
    DonationTime,
    RequestMessage,
    Status,
    DonorName,
    DonorEmail,
    DonatedAt,
    CreatedAt,
}
