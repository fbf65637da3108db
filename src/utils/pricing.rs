use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::booking::DiscountType;
use crate::entities::{coupon, garage_sub_service, sub_service_price};
use crate::error::{AppError, AppResult};

/// Amount deducted from `base` by one discount. Percentage is taken of the
/// base, flat is the amount itself, absent means no deduction.
pub fn apply_discount(base: f64, discount_type: Option<&DiscountType>, amount: Option<f64>) -> f64 {
    match (discount_type, amount) {
        (Some(DiscountType::Percentage), Some(amount)) => base * amount / 100.0,
        (Some(DiscountType::Flat), Some(amount)) => amount,
        _ => 0.0,
    }
}

/// final = base - owner discount - coupon discount. Both discounts are taken
/// against the same base rather than compounded sequentially. Floored at 0 so
/// stacked discounts can never produce a negative price.
pub fn compose_final_price(
    base: f64,
    discount_type: Option<&DiscountType>,
    discount_amount: Option<f64>,
    coupon_discount_type: Option<&DiscountType>,
    coupon_discount_amount: Option<f64>,
) -> f64 {
    let final_price = base
        - apply_discount(base, discount_type, discount_amount)
        - apply_discount(base, coupon_discount_type, coupon_discount_amount);
    final_price.max(0.0)
}

/// Catalog price of a garage sub-service for the given automobile make: a
/// make-specific override row wins over the sub-service's default rate.
pub async fn line_item_price<C: ConnectionTrait>(
    conn: &C,
    garage_sub_service: &garage_sub_service::Model,
    automobile_make_id: Uuid,
) -> AppResult<f64> {
    let override_row = sub_service_price::Entity::find()
        .filter(sub_service_price::Column::GarageSubServiceId.eq(garage_sub_service.id))
        .filter(sub_service_price::Column::AutomobileMakeId.eq(automobile_make_id))
        .one(conn)
        .await?;

    Ok(override_row.map_or(garage_sub_service.price, |row| row.price))
}

#[derive(Debug, Clone)]
pub struct CouponDiscount {
    pub coupon_id: Uuid,
    pub discount_type: DiscountType,
    pub discount_amount: f64,
}

/// Gate checks for applying a coupon to an order of `base_amount` on `today`:
/// active flag, validity window, min/max order total, redemption limit.
/// Failures surface as a field-scoped validation error on `coupon_code`.
fn check_coupon_applicable(
    coupon: &coupon::Model,
    base_amount: f64,
    today: NaiveDate,
) -> AppResult<()> {
    if !coupon.is_active {
        return Err(AppError::field("coupon_code", "coupon is not active"));
    }

    if today < coupon.valid_from || today > coupon.valid_until {
        return Err(AppError::field("coupon_code", "coupon is not valid at this date"));
    }

    if let Some(min_total) = coupon.min_total {
        if base_amount < min_total {
            return Err(AppError::field(
                "coupon_code",
                format!("order total must be at least {min_total} to use this coupon"),
            ));
        }
    }
    if let Some(max_total) = coupon.max_total {
        if base_amount > max_total {
            return Err(AppError::field(
                "coupon_code",
                format!("order total must be at most {max_total} to use this coupon"),
            ));
        }
    }

    if let Some(limit) = coupon.redemption_limit {
        if coupon.customer_redemptions >= limit {
            return Err(AppError::field("coupon_code", "coupon redemption limit reached"));
        }
    }

    Ok(())
}

/// Look up a coupon by code within the garage and check it is applicable to
/// an order of `base_amount`.
pub async fn resolve_coupon_discount<C: ConnectionTrait>(
    conn: &C,
    garage_id: Uuid,
    code: &str,
    base_amount: f64,
) -> AppResult<CouponDiscount> {
    let coupon = coupon::Entity::find()
        .filter(coupon::Column::GarageId.eq(garage_id))
        .filter(coupon::Column::Code.eq(code))
        .one(conn)
        .await?
        .ok_or_else(|| AppError::field("coupon_code", "coupon not found"))?;

    check_coupon_applicable(&coupon, base_amount, Utc::now().date_naive())?;

    Ok(CouponDiscount {
        coupon_id: coupon.id,
        discount_type: coupon.discount_type,
        discount_amount: coupon.discount_amount,
    })
}

/// Count one successful application of the coupon. Intentionally never
/// decremented when the booking is later deleted or rejected.
pub async fn record_redemption<C: ConnectionTrait>(conn: &C, coupon_id: Uuid) -> AppResult<()> {
    let coupon = coupon::Entity::find_by_id(coupon_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::Internal("coupon disappeared during redemption".to_string()))?;

    let redemptions = coupon.customer_redemptions + 1;
    let mut active: coupon::ActiveModel = coupon.into();
    active.customer_redemptions = Set(redemptions);
    active.update(conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_discount_is_taken_of_the_base() {
        assert_eq!(apply_discount(50.0, Some(&DiscountType::Percentage), Some(10.0)), 5.0);
        assert_eq!(apply_discount(200.0, Some(&DiscountType::Percentage), Some(25.0)), 50.0);
    }

    #[test]
    fn flat_discount_is_the_amount_itself() {
        assert_eq!(apply_discount(50.0, Some(&DiscountType::Flat), Some(5.0)), 5.0);
    }

    #[test]
    fn absent_discount_deducts_nothing() {
        assert_eq!(apply_discount(50.0, None, None), 0.0);
        assert_eq!(apply_discount(50.0, Some(&DiscountType::Flat), None), 0.0);
        assert_eq!(apply_discount(50.0, None, Some(10.0)), 0.0);
    }

    #[test]
    fn no_discounts_leaves_the_base_untouched() {
        assert_eq!(compose_final_price(50.0, None, None, None, None), 50.0);
    }

    #[test]
    fn owner_percentage_discount() {
        // 50 with 10% owner discount -> 45
        let final_price =
            compose_final_price(50.0, Some(&DiscountType::Percentage), Some(10.0), None, None);
        assert_eq!(final_price, 45.0);
    }

    #[test]
    fn coupon_stacks_against_the_same_base() {
        // 50 - 10% owner (5) - flat 5 coupon -> 40
        let final_price = compose_final_price(
            50.0,
            Some(&DiscountType::Percentage),
            Some(10.0),
            Some(&DiscountType::Flat),
            Some(5.0),
        );
        assert_eq!(final_price, 40.0);
    }

    #[test]
    fn both_percentage_discounts_use_the_base_not_the_running_total() {
        // 100 - 50% - 50% is 0, not 25: no sequential compounding.
        let final_price = compose_final_price(
            100.0,
            Some(&DiscountType::Percentage),
            Some(50.0),
            Some(&DiscountType::Percentage),
            Some(50.0),
        );
        assert_eq!(final_price, 0.0);
    }

    #[test]
    fn final_price_never_goes_negative() {
        let final_price = compose_final_price(
            20.0,
            Some(&DiscountType::Flat),
            Some(15.0),
            Some(&DiscountType::Flat),
            Some(15.0),
        );
        assert_eq!(final_price, 0.0);
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_coupon() -> coupon::Model {
        coupon::Model {
            id: Uuid::new_v4(),
            garage_id: Uuid::new_v4(),
            code: "SAVE5".to_string(),
            discount_type: DiscountType::Flat,
            discount_amount: 5.0,
            min_total: Some(20.0),
            max_total: Some(500.0),
            redemption_limit: Some(10),
            customer_redemptions: 0,
            is_active: true,
            valid_from: date(2025, 8, 1),
            valid_until: date(2025, 8, 31),
        }
    }

    fn field_error(result: AppResult<()>) -> String {
        match result.unwrap_err() {
            AppError::Validation { errors, .. } => {
                errors.into_keys().next().expect("one field error")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn applicable_coupon_passes_every_gate() {
        assert!(check_coupon_applicable(&valid_coupon(), 50.0, date(2025, 8, 15)).is_ok());
    }

    #[test]
    fn inactive_coupon_is_rejected() {
        let coupon = coupon::Model {
            is_active: false,
            ..valid_coupon()
        };
        let field = field_error(check_coupon_applicable(&coupon, 50.0, date(2025, 8, 15)));
        assert_eq!(field, "coupon_code");
    }

    #[test]
    fn coupon_outside_validity_window_is_rejected() {
        let coupon = valid_coupon();
        assert!(check_coupon_applicable(&coupon, 50.0, date(2025, 7, 31)).is_err());
        assert!(check_coupon_applicable(&coupon, 50.0, date(2025, 9, 1)).is_err());
        // Window boundaries are inclusive.
        assert!(check_coupon_applicable(&coupon, 50.0, date(2025, 8, 1)).is_ok());
        assert!(check_coupon_applicable(&coupon, 50.0, date(2025, 8, 31)).is_ok());
    }

    #[test]
    fn order_total_outside_min_max_is_rejected() {
        let coupon = valid_coupon();
        assert!(check_coupon_applicable(&coupon, 19.99, date(2025, 8, 15)).is_err());
        assert!(check_coupon_applicable(&coupon, 500.01, date(2025, 8, 15)).is_err());
        assert!(check_coupon_applicable(&coupon, 20.0, date(2025, 8, 15)).is_ok());
        assert!(check_coupon_applicable(&coupon, 500.0, date(2025, 8, 15)).is_ok());
    }

    #[test]
    fn exhausted_redemption_limit_is_rejected() {
        let coupon = coupon::Model {
            customer_redemptions: 10,
            ..valid_coupon()
        };
        assert!(check_coupon_applicable(&coupon, 50.0, date(2025, 8, 15)).is_err());

        let unlimited = coupon::Model {
            redemption_limit: None,
            customer_redemptions: 10,
            ..valid_coupon()
        };
        assert!(check_coupon_applicable(&unlimited, 50.0, date(2025, 8, 15)).is_ok());
    }
}
