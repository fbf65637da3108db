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
                    .as_enum(NotificationStatus::Enum)
                    .values([NotificationStatus::Unread, NotificationStatus::Read])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NotificationTemplate::Table)
                    .if_not_exists()
                    .col(uuid(NotificationTemplate::Id).primary_key())
                    .col(
                        string_len(NotificationTemplate::TemplateType, 100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(text(NotificationTemplate::Body).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(uuid(Notification::Id).primary_key())
                    .col(uuid(Notification::SenderId).not_null())
                    .col(uuid(Notification::ReceiverId).not_null())
                    .col(uuid(Notification::CustomerId).not_null())
                    .col(uuid(Notification::GarageId).not_null())
                    // No FK on booking_id: notifications outlive deleted bookings.
                    .col(uuid(Notification::BookingId).not_null())
                    .col(uuid(Notification::NotificationTemplateId).not_null())
                    .col(
                        ColumnDef::new(Notification::Status)
                            .custom(NotificationStatus::Enum)
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Notification::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_receiver")
                            .from(Notification::Table, Notification::ReceiverId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_garage")
                            .from(Notification::Table, Notification::GarageId)
                            .to(Garage::Table, Garage::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_template")
                            .from(Notification::Table, Notification::NotificationTemplateId)
                            .to(NotificationTemplate::Table, NotificationTemplate::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NotificationTemplate::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(NotificationStatus::Enum).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationTemplate {
    Table,
    Id,
    TemplateType,
    Body,
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    SenderId,
    ReceiverId,
    CustomerId,
    GarageId,
    BookingId,
    NotificationTemplateId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum NotificationStatus {
    #[sea_orm(iden = "notification_status")]
    Enum,
    #[sea_orm(iden = "unread")]
    Unread,
    #[sea_orm(iden = "read")]
    Read,
}
