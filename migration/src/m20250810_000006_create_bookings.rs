use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20250810_000001_create_users::User;
use super::m20250810_000002_create_garages::Garage;
use super::m20250810_000004_create_coupons::DiscountType;
use super::m20250810_000005_create_pre_bookings::PreBooking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(BookingStatus::Enum)
                    .values([
                        BookingStatus::Pending,
                        BookingStatus::Confirmed,
                        BookingStatus::RejectedByClient,
                        BookingStatus::RejectedByGarageOwner,
                        BookingStatus::ConvertedToJob,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(CreatedFrom::Enum)
                    .values([CreatedFrom::GarageOwnerSide, CreatedFrom::CustomerSide])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::GarageId).not_null())
                    .col(uuid(Booking::CustomerId).not_null())
                    .col(uuid(Booking::AutomobileMakeId).not_null())
                    .col(uuid(Booking::AutomobileModelId).not_null())
                    .col(string_len(Booking::CarRegistrationNo, 50).not_null())
                    .col(string_len(Booking::CarRegistrationYear, 10).not_null())
                    .col(text_null(Booking::AdditionalInformation))
                    .col(string_len_null(Booking::Fuel, 50))
                    .col(string_len_null(Booking::Transmission, 50))
                    .col(date(Booking::JobStartDate).not_null())
                    .col(time(Booking::JobStartTime).not_null())
                    .col(time(Booking::JobEndTime).not_null())
                    .col(uuid_null(Booking::ExpertId))
                    .col(json_binary(Booking::BookedSlots).not_null())
                    .col(
                        ColumnDef::new(Booking::Status)
                            .custom(BookingStatus::Enum)
                            .not_null(),
                    )
                    .col(double(Booking::Price).not_null().default(0))
                    .col(
                        ColumnDef::new(Booking::DiscountType)
                            .custom(DiscountType::Enum)
                            .null(),
                    )
                    .col(double_null(Booking::DiscountAmount))
                    .col(string_len_null(Booking::CouponCode, 100))
                    .col(
                        ColumnDef::new(Booking::CouponDiscountType)
                            .custom(DiscountType::Enum)
                            .null(),
                    )
                    .col(double_null(Booking::CouponDiscountAmount))
                    .col(double(Booking::FinalPrice).not_null().default(0))
                    .col(uuid_null(Booking::PreBookingId))
                    .col(
                        ColumnDef::new(Booking::CreatedFrom)
                            .custom(CreatedFrom::Enum)
                            .not_null(),
                    )
                    .col(uuid(Booking::CreatedBy).not_null())
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_garage")
                            .from(Booking::Table, Booking::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_customer")
                            .from(Booking::Table, Booking::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_pre_booking")
                            .from(Booking::Table, Booking::PreBookingId)
                            .to(PreBooking::Table, PreBooking::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Slot validation scans by expert and date
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_expert_date")
                    .table(Booking::Table)
                    .col(Booking::ExpertId)
                    .col(Booking::JobStartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingSubService::Table)
                    .if_not_exists()
                    .col(uuid(BookingSubService::Id).primary_key())
                    .col(uuid(BookingSubService::BookingId).not_null())
                    .col(uuid(BookingSubService::SubServiceId).not_null())
                    .col(double(BookingSubService::Price).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_sub_service_booking")
                            .from(BookingSubService::Table, BookingSubService::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingPackage::Table)
                    .if_not_exists()
                    .col(uuid(BookingPackage::Id).primary_key())
                    .col(uuid(BookingPackage::BookingId).not_null())
                    .col(uuid(BookingPackage::GaragePackageId).not_null())
                    .col(double(BookingPackage::Price).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_package_booking")
                            .from(BookingPackage::Table, BookingPackage::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingPackage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BookingSubService::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(CreatedFrom::Enum).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(BookingStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
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
    ExpertId,
    BookedSlots,
    Status,
    Price,
    DiscountType,
    DiscountAmount,
    CouponCode,
    CouponDiscountType,
    CouponDiscountAmount,
    FinalPrice,
    PreBookingId,
    CreatedFrom,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum BookingSubService {
    Table,
    Id,
    BookingId,
    SubServiceId,
    Price,
}

#[derive(DeriveIden)]
pub enum BookingPackage {
    Table,
    Id,
    BookingId,
    GaragePackageId,
    Price,
}

#[derive(DeriveIden)]
pub enum BookingStatus {
    #[sea_orm(iden = "booking_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "confirmed")]
    Confirmed,
    #[sea_orm(iden = "rejected_by_client")]
    RejectedByClient,
    #[sea_orm(iden = "rejected_by_garage_owner")]
    RejectedByGarageOwner,
    #[sea_orm(iden = "converted_to_job")]
    ConvertedToJob,
}

#[derive(DeriveIden)]
pub enum CreatedFrom {
    #[sea_orm(iden = "created_from")]
    Enum,
    #[sea_orm(iden = "garage_owner_side")]
    GarageOwnerSide,
    #[sea_orm(iden = "customer_side")]
    CustomerSide,
}
