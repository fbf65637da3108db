use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20250810_000002_create_garages::Garage;
use super::m20250810_000004_create_coupons::DiscountType;
use super::m20250810_000006_create_bookings::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(JobStatus::Enum)
                    .values([
                        JobStatus::Pending,
                        JobStatus::Active,
                        JobStatus::Completed,
                        JobStatus::Cancelled,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(PaymentStatus::Enum)
                    .values([PaymentStatus::Due, PaymentStatus::Complete])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(uuid(Job::Id).primary_key())
                    .col(uuid(Job::BookingId).not_null())
                    .col(uuid(Job::GarageId).not_null())
                    .col(uuid(Job::CustomerId).not_null())
                    .col(uuid(Job::AutomobileMakeId).not_null())
                    .col(uuid(Job::AutomobileModelId).not_null())
                    .col(string_len(Job::CarRegistrationNo, 50).not_null())
                    .col(string_len(Job::CarRegistrationYear, 10).not_null())
                    .col(text_null(Job::AdditionalInformation))
                    .col(string_len_null(Job::Fuel, 50))
                    .col(string_len_null(Job::Transmission, 50))
                    .col(date(Job::JobStartDate).not_null())
                    .col(time(Job::JobStartTime).not_null())
                    .col(time(Job::JobEndTime).not_null())
                    .col(
                        ColumnDef::new(Job::DiscountType)
                            .custom(DiscountType::Enum)
                            .null(),
                    )
                    .col(double_null(Job::DiscountAmount))
                    .col(
                        ColumnDef::new(Job::CouponDiscountType)
                            .custom(DiscountType::Enum)
                            .null(),
                    )
                    .col(double_null(Job::CouponDiscountAmount))
                    .col(double(Job::Price).not_null())
                    .col(double(Job::FinalPrice).not_null())
                    .col(
                        ColumnDef::new(Job::Status)
                            .custom(JobStatus::Enum)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Job::PaymentStatus)
                            .custom(PaymentStatus::Enum)
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Job::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_garage")
                            .from(Job::Table, Job::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_booking")
                            .from(Job::Table, Job::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(PaymentStatus::Enum).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(JobStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    BookingId,
    GarageId,
    CustomerId,
    AutomobileMakeId,
    AutomobileModelId,
    CarRegistrationNo,
    CarRegistrationYear,
    AdditionalInformation,
    Fuel,
    Transmission,
    JobStartDate,
    JobStartTime,
    JobEndTime,
    DiscountType,
    DiscountAmount,
    CouponDiscountType,
    CouponDiscountAmount,
    Price,
    FinalPrice,
    Status,
    PaymentStatus,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum JobStatus {
    #[sea_orm(iden = "job_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "active")]
    Active,
    #[sea_orm(iden = "completed")]
    Completed,
    #[sea_orm(iden = "cancelled")]
    Cancelled,
}

#[derive(DeriveIden)]
pub enum PaymentStatus {
    #[sea_orm(iden = "payment_status")]
    Enum,
    #[sea_orm(iden = "due")]
    Due,
    #[sea_orm(iden = "complete")]
    Complete,
}
