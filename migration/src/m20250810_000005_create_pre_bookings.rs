use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20250810_000001_create_users::User;
use super::m20250810_000002_create_garages::Garage;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(PreBookingStatus::Enum)
                    .values([PreBookingStatus::Pending, PreBookingStatus::Booked])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(JobBidStatus::Enum)
                    .values([
                        JobBidStatus::Pending,
                        JobBidStatus::Accepted,
                        JobBidStatus::CanceledAfterBooking,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PreBooking::Table)
                    .if_not_exists()
                    .col(uuid(PreBooking::Id).primary_key())
                    .col(uuid(PreBooking::CustomerId).not_null())
                    .col(uuid(PreBooking::AutomobileMakeId).not_null())
                    .col(uuid(PreBooking::AutomobileModelId).not_null())
                    .col(string_len(PreBooking::CarRegistrationNo, 50).not_null())
                    .col(date(PreBooking::JobStartDate).not_null())
                    .col(
                        ColumnDef::new(PreBooking::Status)
                            .custom(PreBookingStatus::Enum)
                            .not_null(),
                    )
                    .col(uuid_null(PreBooking::SelectedBidId))
                    .col(
                        timestamp_with_time_zone(PreBooking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pre_booking_customer")
                            .from(PreBooking::Table, PreBooking::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobBid::Table)
                    .if_not_exists()
                    .col(uuid(JobBid::Id).primary_key())
                    .col(uuid(JobBid::PreBookingId).not_null())
                    .col(uuid(JobBid::GarageId).not_null())
                    .col(double(JobBid::Price).not_null())
                    .col(
                        ColumnDef::new(JobBid::Status)
                            .custom(JobBidStatus::Enum)
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(JobBid::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_bid_pre_booking")
                            .from(JobBid::Table, JobBid::PreBookingId)
                            .to(PreBooking::Table, PreBooking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_bid_garage")
                            .from(JobBid::Table, JobBid::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobBid::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PreBooking::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(JobBidStatus::Enum).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(PreBookingStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PreBooking {
    Table,
    Id,
    CustomerId,
    AutomobileMakeId,
    AutomobileModelId,
    CarRegistrationNo,
    JobStartDate,
    Status,
    SelectedBidId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum JobBid {
    Table,
    Id,
    PreBookingId,
    GarageId,
    Price,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum PreBookingStatus {
    #[sea_orm(iden = "pre_booking_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "booked")]
    Booked,
}

#[derive(DeriveIden)]
pub enum JobBidStatus {
    #[sea_orm(iden = "job_bid_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "accepted")]
    Accepted,
    #[sea_orm(iden = "canceled_after_booking")]
    CanceledAfterBooking,
}
