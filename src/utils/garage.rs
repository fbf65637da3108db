use chrono::{Datelike, NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::{garage, garage_automobile_make, garage_automobile_model, garage_time};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;

pub fn require_permission(claims: &Claims, permission: &str) -> AppResult<()> {
    if !claims.has_permission(permission) {
        return Err(AppError::Unauthorized(
            "You can not perform this action".to_string(),
        ));
    }
    Ok(())
}

/// Resolve the garage and check the caller owns it. Ownership failure and a
/// nonexistent garage are deliberately the same answer.
pub async fn garage_owner_check<C: ConnectionTrait>(
    conn: &C,
    claims: &Claims,
    garage_id: Uuid,
) -> AppResult<garage::Model> {
    garage::Entity::find()
        .filter(garage::Column::Id.eq(garage_id))
        .filter(garage::Column::OwnerId.eq(claims.sub))
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::Unauthorized(
                "you are not the owner of the garage or the requested garage does not exist."
                    .to_string(),
            )
        })
}

/// True when `start` falls inside the opening hours `[opening, closing)`.
pub fn is_within_hours(opening: NaiveTime, closing: NaiveTime, start: NaiveTime) -> bool {
    start >= opening && start < closing
}

/// Check the job start falls on a weekday and time the garage operates.
/// Weekday numbering follows 0 = Sunday .. 6 = Saturday.
pub async fn validate_garage_times<C: ConnectionTrait>(
    conn: &C,
    garage_id: Uuid,
    job_start_date: NaiveDate,
    job_start_time: NaiveTime,
) -> AppResult<()> {
    let day = job_start_date.weekday().num_days_from_sunday() as i16;

    let garage_time = garage_time::Entity::find()
        .filter(garage_time::Column::GarageId.eq(garage_id))
        .filter(garage_time::Column::Day.eq(day))
        .one(conn)
        .await?;

    let open = garage_time.is_some_and(|t| {
        !t.is_closed && is_within_hours(t.opening_time, t.closing_time, job_start_time)
    });

    if !open {
        return Err(AppError::field(
            "job_start_time",
            "The garage is not open at the selected day and time",
        ));
    }
    Ok(())
}

/// Two-step referential check: the make must be supported by the garage, and
/// the model must belong to that garage-make pairing.
pub async fn validate_garage_automobile<C: ConnectionTrait>(
    conn: &C,
    garage_id: Uuid,
    automobile_make_id: Uuid,
    automobile_model_id: Uuid,
) -> AppResult<()> {
    let garage_make = garage_automobile_make::Entity::find()
        .filter(garage_automobile_make::Column::GarageId.eq(garage_id))
        .filter(garage_automobile_make::Column::AutomobileMakeId.eq(automobile_make_id))
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::field("automobile_make_id", "This garage does not support this make")
        })?;

    garage_automobile_model::Entity::find()
        .filter(garage_automobile_model::Column::GarageAutomobileMakeId.eq(garage_make.id))
        .filter(garage_automobile_model::Column::AutomobileModelId.eq(automobile_model_id))
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::field("automobile_model_id", "This garage does not support this model")
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn start_inside_hours_is_accepted() {
        assert!(is_within_hours(time(8, 0), time(18, 0), time(8, 0)));
        assert!(is_within_hours(time(8, 0), time(18, 0), time(12, 30)));
    }

    #[test]
    fn closing_time_itself_is_outside_hours() {
        assert!(!is_within_hours(time(8, 0), time(18, 0), time(18, 0)));
        assert!(!is_within_hours(time(8, 0), time(18, 0), time(7, 59)));
    }
}
