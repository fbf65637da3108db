use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::booking;
use crate::entities::notification::{self, NotificationStatus};
use crate::entities::notification_template;
use crate::error::AppResult;

pub const BOOKING_CREATED_BY_GARAGE_OWNER: &str = "booking_created_by_garage_owner";
pub const BOOKING_UPDATED_BY_GARAGE_OWNER: &str = "booking_updated_by_garage_owner";
pub const BOOKING_CONFIRMED_BY_GARAGE_OWNER: &str = "booking_confirmed_by_garage_owner";
pub const BOOKING_STATUS_CHANGED_BY_GARAGE_OWNER: &str = "booking_status_changed_by_garage_owner";
pub const BOOKING_REJECTED_BY_GARAGE_OWNER: &str = "booking_rejected_by_garage_owner";
pub const BOOKING_DELETED_BY_GARAGE_OWNER: &str = "booking_deleted_by_garage_owner";

pub const TEMPLATE_TYPES: [&str; 6] = [
    BOOKING_CREATED_BY_GARAGE_OWNER,
    BOOKING_UPDATED_BY_GARAGE_OWNER,
    BOOKING_CONFIRMED_BY_GARAGE_OWNER,
    BOOKING_STATUS_CHANGED_BY_GARAGE_OWNER,
    BOOKING_REJECTED_BY_GARAGE_OWNER,
    BOOKING_DELETED_BY_GARAGE_OWNER,
];

/// Record an unread notification for the booking's customer. A missing
/// template is a configuration defect, not a reason to abort the caller's
/// transaction: it is logged and the notification skipped.
pub async fn emit<C: ConnectionTrait>(
    conn: &C,
    template_type: &str,
    booking: &booking::Model,
    sender_id: Uuid,
) -> AppResult<()> {
    let template = notification_template::Entity::find()
        .filter(notification_template::Column::TemplateType.eq(template_type))
        .one(conn)
        .await?;

    let Some(template) = template else {
        tracing::warn!(template_type, booking_id = %booking.id, "notification template missing, skipping notification");
        return Ok(());
    };

    notification::ActiveModel {
        id: Set(Uuid::new_v4()),
        sender_id: Set(sender_id),
        receiver_id: Set(booking.customer_id),
        customer_id: Set(booking.customer_id),
        garage_id: Set(booking.garage_id),
        booking_id: Set(booking.id),
        notification_template_id: Set(template.id),
        status: Set(NotificationStatus::Unread),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(())
}
