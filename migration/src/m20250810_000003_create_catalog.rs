use sea_orm_migration::{prelude::*, schema::*};

use super::m20250810_000002_create_garages::Garage;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GarageService::Table)
                    .if_not_exists()
                    .col(uuid(GarageService::Id).primary_key())
                    .col(uuid(GarageService::GarageId).not_null())
                    .col(uuid(GarageService::ServiceId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_service_garage")
                            .from(GarageService::Table, GarageService::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GarageSubService::Table)
                    .if_not_exists()
                    .col(uuid(GarageSubService::Id).primary_key())
                    .col(uuid(GarageSubService::GarageServiceId).not_null())
                    .col(uuid(GarageSubService::SubServiceId).not_null())
                    .col(double(GarageSubService::Price).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_sub_service_service")
                            .from(GarageSubService::Table, GarageSubService::GarageServiceId)
                            .to(GarageService::Table, GarageService::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubServicePrice::Table)
                    .if_not_exists()
                    .col(uuid(SubServicePrice::Id).primary_key())
                    .col(uuid(SubServicePrice::GarageSubServiceId).not_null())
                    .col(uuid(SubServicePrice::AutomobileMakeId).not_null())
                    .col(double(SubServicePrice::Price).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_service_price_sub_service")
                            .from(SubServicePrice::Table, SubServicePrice::GarageSubServiceId)
                            .to(GarageSubService::Table, GarageSubService::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GaragePackage::Table)
                    .if_not_exists()
                    .col(uuid(GaragePackage::Id).primary_key())
                    .col(uuid(GaragePackage::GarageId).not_null())
                    .col(string_len(GaragePackage::Name, 255).not_null())
                    .col(double(GaragePackage::Price).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_package_garage")
                            .from(GaragePackage::Table, GaragePackage::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GaragePackage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubServicePrice::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GarageSubService::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GarageService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GarageService {
    Table,
    Id,
    GarageId,
    ServiceId,
}

#[derive(DeriveIden)]
pub enum GarageSubService {
    Table,
    Id,
    GarageServiceId,
    SubServiceId,
    Price,
}

#[derive(DeriveIden)]
pub enum SubServicePrice {
    Table,
    Id,
    GarageSubServiceId,
    AutomobileMakeId,
    Price,
}

#[derive(DeriveIden)]
pub enum GaragePackage {
    Table,
    Id,
    GarageId,
    Name,
    Price,
}
