use sea_orm_migration::{prelude::*, schema::*};

use super::m20250810_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Garage::Table)
                    .if_not_exists()
                    .col(uuid(Garage::Id).primary_key())
                    .col(uuid(Garage::OwnerId).not_null())
                    .col(string_len(Garage::Name, 255).not_null())
                    .col(boolean(Garage::IsActive).not_null().default(true))
                    .col(
                        timestamp_with_time_zone(Garage::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_owner")
                            .from(Garage::Table, Garage::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GarageTime::Table)
                    .if_not_exists()
                    .col(uuid(GarageTime::Id).primary_key())
                    .col(uuid(GarageTime::GarageId).not_null())
                    .col(small_integer(GarageTime::Day).not_null())
                    .col(time(GarageTime::OpeningTime).not_null())
                    .col(time(GarageTime::ClosingTime).not_null())
                    .col(boolean(GarageTime::IsClosed).not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_time_garage")
                            .from(GarageTime::Table, GarageTime::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GarageAutomobileMake::Table)
                    .if_not_exists()
                    .col(uuid(GarageAutomobileMake::Id).primary_key())
                    .col(uuid(GarageAutomobileMake::GarageId).not_null())
                    .col(uuid(GarageAutomobileMake::AutomobileMakeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_automobile_make_garage")
                            .from(GarageAutomobileMake::Table, GarageAutomobileMake::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GarageAutomobileModel::Table)
                    .if_not_exists()
                    .col(uuid(GarageAutomobileModel::Id).primary_key())
                    .col(uuid(GarageAutomobileModel::GarageAutomobileMakeId).not_null())
                    .col(uuid(GarageAutomobileModel::AutomobileModelId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_garage_automobile_model_make")
                            .from(
                                GarageAutomobileModel::Table,
                                GarageAutomobileModel::GarageAutomobileMakeId,
                            )
                            .to(GarageAutomobileMake::Table, GarageAutomobileMake::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GarageAutomobileModel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GarageAutomobileMake::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GarageTime::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Garage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Garage {
    Table,
    Id,
    OwnerId,
    Name,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum GarageTime {
    Table,
    Id,
    GarageId,
    Day,
    OpeningTime,
    ClosingTime,
    IsClosed,
}

#[derive(DeriveIden)]
pub enum GarageAutomobileMake {
    Table,
    Id,
    GarageId,
    AutomobileMakeId,
}

#[derive(DeriveIden)]
pub enum GarageAutomobileModel {
    Table,
    Id,
    GarageAutomobileMakeId,
    AutomobileModelId,
}
