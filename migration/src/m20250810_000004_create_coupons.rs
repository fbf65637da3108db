use sea_orm_migration::{prelude::*, schema::*, sea_orm::sea_query::extension::postgres::Type};

use super::m20250810_000002_create_garages::Garage;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shared by coupons, bookings and jobs
        manager
            .create_type(
                Type::create()
                    .as_enum(DiscountType::Enum)
                    .values([DiscountType::Percentage, DiscountType::Flat])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Coupon::Table)
                    .if_not_exists()
                    .col(uuid(Coupon::Id).primary_key())
                    .col(uuid(Coupon::GarageId).not_null())
                    .col(string_len(Coupon::Code, 100).not_null())
                    .col(
                        ColumnDef::new(Coupon::DiscountType)
                            .custom(DiscountType::Enum)
                            .not_null(),
                    )
                    .col(double(Coupon::DiscountAmount).not_null())
                    .col(double_null(Coupon::MinTotal))
                    .col(double_null(Coupon::MaxTotal))
                    .col(integer_null(Coupon::RedemptionLimit))
                    .col(integer(Coupon::CustomerRedemptions).not_null().default(0))
                    .col(boolean(Coupon::IsActive).not_null().default(true))
                    .col(date(Coupon::ValidFrom).not_null())
                    .col(date(Coupon::ValidUntil).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coupon_garage")
                            .from(Coupon::Table, Coupon::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_coupon_garage_code")
                            .col(Coupon::GarageId)
                            .col(Coupon::Code)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coupon::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(DiscountType::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coupon {
    Table,
    Id,
    GarageId,
    Code,
    DiscountType,
    DiscountAmount,
    MinTotal,
    MaxTotal,
    RedemptionLimit,
    CustomerRedemptions,
    IsActive,
    ValidFrom,
    ValidUntil,
}

#[derive(DeriveIden)]
pub enum DiscountType {
    #[sea_orm(iden = "discount_type")]
    Enum,
    #[sea_orm(iden = "percentage")]
    Percentage,
    #[sea_orm(iden = "flat")]
    Flat,
}
