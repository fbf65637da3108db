use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{Days, NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::booking::{
    self, BookedSlots, BookingStatus, CreatedFrom, DiscountType, SlotRange,
};
use crate::entities::job::{self, JobStatus, PaymentStatus};
use crate::entities::job_bid::{self, JobBidStatus};
use crate::entities::pre_booking::{self, PreBookingStatus};
use crate::entities::{
    booking_package, booking_sub_service, garage_package, garage_service, garage_sub_service,
};
use crate::error::{AppError, AppResult};
use crate::utils::garage::{
    garage_owner_check, require_permission, validate_garage_automobile, validate_garage_times,
};
use crate::utils::jwt::Claims;
use crate::utils::{notify, pricing, slots};
use crate::AppState;

const CONVERTED_TO_JOB_LOCK: &str = "Booking can not be modified because it is 'converted_to_job'";

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub garage_id: Uuid,
    pub customer_id: Uuid,
    pub automobile_make_id: Uuid,
    pub automobile_model_id: Uuid,
    pub car_registration_no: String,
    pub car_registration_year: String,
    pub additional_information: Option<String>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub job_start_date: NaiveDate,
    pub job_start_time: NaiveTime,
    pub job_end_time: NaiveTime,
    pub expert_id: Option<Uuid>,
    #[serde(default)]
    pub booked_slots: Vec<SlotRange>,
    pub booking_sub_service_ids: Vec<Uuid>,
    pub booking_garage_package_ids: Vec<Uuid>,
    pub coupon_code: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    pub id: Uuid,
    pub garage_id: Uuid,
    pub automobile_make_id: Uuid,
    pub automobile_model_id: Uuid,
    pub car_registration_no: String,
    pub car_registration_year: String,
    pub additional_information: Option<String>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub job_start_date: NaiveDate,
    pub job_start_time: NaiveTime,
    pub job_end_time: NaiveTime,
    pub expert_id: Option<Uuid>,
    #[serde(default)]
    pub booked_slots: Vec<SlotRange>,
    pub booking_sub_service_ids: Vec<Uuid>,
    pub booking_garage_package_ids: Vec<Uuid>,
    pub discount_type: Option<DiscountType>,
    pub discount_amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeBookingStatusRequest {
    pub id: Uuid,
    pub garage_id: Uuid,
    pub status: BookingStatus,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmBookingRequest {
    pub id: Uuid,
    pub garage_id: Uuid,
    pub job_start_date: Option<NaiveDate>,
    pub job_start_time: Option<NaiveTime>,
    pub job_end_time: Option<NaiveTime>,
    pub price: Option<f64>,
    pub discount_type: Option<DiscountType>,
    pub discount_amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    pub per_page: Option<u64>,
    pub page: Option<u64>,
    pub search_key: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    #[serde(flatten)]
    pub booking: booking::Model,
    pub booking_sub_services: Vec<booking_sub_service::Model>,
    pub booking_packages: Vec<booking_package::Model>,
}

#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub data: Vec<BookingResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Load the line-item children and assemble the full booking payload.
async fn booking_response<C: ConnectionTrait>(
    conn: &C,
    booking: booking::Model,
) -> AppResult<BookingResponse> {
    let booking_sub_services = booking_sub_service::Entity::find()
        .filter(booking_sub_service::Column::BookingId.eq(booking.id))
        .all(conn)
        .await?;
    let booking_packages = booking_package::Entity::find()
        .filter(booking_package::Column::BookingId.eq(booking.id))
        .all(conn)
        .await?;

    Ok(BookingResponse {
        booking,
        booking_sub_services,
        booking_packages,
    })
}

/// Load a booking scoped to the caller's garage. A booking id belonging to a
/// different garage is indistinguishable from a missing one.
async fn load_scoped_booking<C: ConnectionTrait>(
    conn: &C,
    booking_id: Uuid,
    garage_id: Uuid,
) -> AppResult<booking::Model> {
    booking::Entity::find()
        .filter(booking::Column::Id.eq(booking_id))
        .filter(booking::Column::GarageId.eq(garage_id))
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("booking not found".to_string()))
}

fn reject_if_terminal(booking: &booking::Model) -> AppResult<()> {
    if booking.status.is_terminal() {
        return Err(AppError::StateConflict(CONVERTED_TO_JOB_LOCK.to_string()));
    }
    Ok(())
}

/// Snapshot the selected sub-services and packages as line items of the
/// booking and return the summed pre-discount price. Each sub-service must be
/// offered through one of the garage's services; packages are garage-scoped
/// directly. Failures carry the index of the offending selection.
async fn create_line_items<C: ConnectionTrait>(
    conn: &C,
    garage_id: Uuid,
    booking_id: Uuid,
    automobile_make_id: Uuid,
    sub_service_ids: &[Uuid],
    package_ids: &[Uuid],
) -> AppResult<f64> {
    let mut total_price = 0.0;

    for (index, sub_service_id) in sub_service_ids.iter().enumerate() {
        let garage_sub_service = garage_sub_service::Entity::find()
            .filter(garage_sub_service::Column::SubServiceId.eq(*sub_service_id))
            .inner_join(garage_service::Entity)
            .filter(garage_service::Column::GarageId.eq(garage_id))
            .one(conn)
            .await?
            .ok_or_else(|| {
                AppError::field(format!("booking_sub_service_ids[{index}]"), "invalid service")
            })?;

        let price = pricing::line_item_price(conn, &garage_sub_service, automobile_make_id).await?;
        total_price += price;

        booking_sub_service::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(booking_id),
            sub_service_id: Set(garage_sub_service.sub_service_id),
            price: Set(price),
        }
        .insert(conn)
        .await?;
    }

    for (index, package_id) in package_ids.iter().enumerate() {
        let garage_package = garage_package::Entity::find()
            .filter(garage_package::Column::Id.eq(*package_id))
            .filter(garage_package::Column::GarageId.eq(garage_id))
            .one(conn)
            .await?
            .ok_or_else(|| {
                AppError::field(
                    format!("booking_garage_package_ids[{index}]"),
                    "invalid package",
                )
            })?;

        total_price += garage_package.price;

        booking_package::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(booking_id),
            garage_package_id: Set(garage_package.id),
            price: Set(garage_package.price),
        }
        .insert(conn)
        .await?;
    }

    Ok(total_price)
}

/// A booking that came out of the bidding flow returns its pre-booking to the
/// open pool when the garage backs out: the pre-booking goes back to pending,
/// its selected bid is cleared and the bid marked canceled.
async fn reopen_pre_booking<C: ConnectionTrait>(
    conn: &C,
    booking: &booking::Model,
) -> AppResult<()> {
    let Some(pre_booking_id) = booking.pre_booking_id else {
        return Ok(());
    };

    let pre_booking = pre_booking::Entity::find_by_id(pre_booking_id)
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("pre-booking {pre_booking_id} missing for booking"))
        })?;

    if let Some(selected_bid_id) = pre_booking.selected_bid_id {
        if let Some(bid) = job_bid::Entity::find_by_id(selected_bid_id).one(conn).await? {
            let mut bid: job_bid::ActiveModel = bid.into();
            bid.status = Set(JobBidStatus::CanceledAfterBooking);
            bid.update(conn).await?;
        }
    }

    let mut pre_booking: pre_booking::ActiveModel = pre_booking.into();
    pre_booking.status = Set(PreBookingStatus::Pending);
    pre_booking.selected_bid_id = Set(None);
    pre_booking.update(conn).await?;

    Ok(())
}

/// Create a booking on behalf of a customer (garage owner side).
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    require_permission(&claims, "booking_create")?;

    let txn = state.db.begin().await?;

    let garage = garage_owner_check(&txn, &claims, payload.garage_id).await?;

    validate_garage_times(&txn, garage.id, payload.job_start_date, payload.job_start_time).await?;
    validate_garage_automobile(
        &txn,
        garage.id,
        payload.automobile_make_id,
        payload.automobile_model_id,
    )
    .await?;
    slots::validate_booking_slots(
        &txn,
        None,
        &payload.booked_slots,
        payload.job_start_date,
        payload.expert_id,
    )
    .await?;

    let booking_id = Uuid::new_v4();
    let booking = booking::ActiveModel {
        id: Set(booking_id),
        garage_id: Set(garage.id),
        customer_id: Set(payload.customer_id),
        automobile_make_id: Set(payload.automobile_make_id),
        automobile_model_id: Set(payload.automobile_model_id),
        car_registration_no: Set(payload.car_registration_no.clone()),
        car_registration_year: Set(payload.car_registration_year.clone()),
        additional_information: Set(payload.additional_information.clone()),
        fuel: Set(payload.fuel.clone()),
        transmission: Set(payload.transmission.clone()),
        job_start_date: Set(payload.job_start_date),
        job_start_time: Set(payload.job_start_time),
        job_end_time: Set(payload.job_end_time),
        expert_id: Set(payload.expert_id),
        booked_slots: Set(BookedSlots(payload.booked_slots.clone())),
        status: Set(BookingStatus::Pending),
        price: Set(0.0),
        discount_type: Set(payload.discount_type.clone()),
        discount_amount: Set(payload.discount_amount),
        coupon_code: Set(None),
        coupon_discount_type: Set(None),
        coupon_discount_amount: Set(None),
        final_price: Set(0.0),
        pre_booking_id: Set(None),
        created_from: Set(CreatedFrom::GarageOwnerSide),
        created_by: Set(claims.sub),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let total_price = create_line_items(
        &txn,
        garage.id,
        booking.id,
        payload.automobile_make_id,
        &payload.booking_sub_service_ids,
        &payload.booking_garage_package_ids,
    )
    .await?;

    let mut coupon_discount_type = None;
    let mut coupon_discount_amount = None;

    let mut active: booking::ActiveModel = booking.into();
    active.price = Set(total_price);

    if let Some(code) = payload.coupon_code.as_deref().filter(|c| !c.is_empty()) {
        let coupon = pricing::resolve_coupon_discount(&txn, garage.id, code, total_price).await?;
        pricing::record_redemption(&txn, coupon.coupon_id).await?;

        active.coupon_code = Set(Some(code.to_string()));
        active.coupon_discount_type = Set(Some(coupon.discount_type.clone()));
        active.coupon_discount_amount = Set(Some(coupon.discount_amount));
        coupon_discount_type = Some(coupon.discount_type);
        coupon_discount_amount = Some(coupon.discount_amount);
    }

    active.final_price = Set(pricing::compose_final_price(
        total_price,
        payload.discount_type.as_ref(),
        payload.discount_amount,
        coupon_discount_type.as_ref(),
        coupon_discount_amount,
    ));

    let booking = active.update(&txn).await?;

    notify::emit(
        &txn,
        notify::BOOKING_CREATED_BY_GARAGE_OWNER,
        &booking,
        garage.owner_id,
    )
    .await?;

    txn.commit().await?;

    let response = booking_response(&state.db, booking).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a booking in place. Line items are fully replaced, never diffed,
/// and the price is recomputed from scratch.
pub async fn update_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    require_permission(&claims, "booking_update")?;

    let txn = state.db.begin().await?;

    let garage = garage_owner_check(&txn, &claims, payload.garage_id).await?;
    let booking = load_scoped_booking(&txn, payload.id, garage.id).await?;
    reject_if_terminal(&booking)?;

    // Excluding our own id keeps the booking from conflicting with the slots
    // it currently holds.
    slots::validate_booking_slots(
        &txn,
        Some(booking.id),
        &payload.booked_slots,
        payload.job_start_date,
        payload.expert_id,
    )
    .await?;

    validate_garage_automobile(
        &txn,
        garage.id,
        payload.automobile_make_id,
        payload.automobile_model_id,
    )
    .await?;

    let mut active: booking::ActiveModel = booking.into();
    active.automobile_make_id = Set(payload.automobile_make_id);
    active.automobile_model_id = Set(payload.automobile_model_id);
    active.car_registration_no = Set(payload.car_registration_no.clone());
    active.car_registration_year = Set(payload.car_registration_year.clone());
    active.additional_information = Set(payload.additional_information.clone());
    active.fuel = Set(payload.fuel.clone());
    active.transmission = Set(payload.transmission.clone());
    active.job_start_date = Set(payload.job_start_date);
    active.job_start_time = Set(payload.job_start_time);
    active.job_end_time = Set(payload.job_end_time);
    active.expert_id = Set(payload.expert_id);
    active.booked_slots = Set(BookedSlots(payload.booked_slots.clone()));
    active.discount_type = Set(payload.discount_type.clone());
    active.discount_amount = Set(payload.discount_amount);
    let booking = active.update(&txn).await?;

    // Replace all children: delete then recreate from the new selection.
    booking_sub_service::Entity::delete_many()
        .filter(booking_sub_service::Column::BookingId.eq(booking.id))
        .exec(&txn)
        .await?;
    booking_package::Entity::delete_many()
        .filter(booking_package::Column::BookingId.eq(booking.id))
        .exec(&txn)
        .await?;

    let total_price = create_line_items(
        &txn,
        garage.id,
        booking.id,
        payload.automobile_make_id,
        &payload.booking_sub_service_ids,
        &payload.booking_garage_package_ids,
    )
    .await?;

    let mut active: booking::ActiveModel = booking.into();
    active.price = Set(total_price);
    let booking = active.update(&txn).await?;

    let mut active: booking::ActiveModel = booking.clone().into();
    active.final_price = Set(pricing::compose_final_price(
        total_price,
        booking.discount_type.as_ref(),
        booking.discount_amount,
        booking.coupon_discount_type.as_ref(),
        booking.coupon_discount_amount,
    ));
    let booking = active.update(&txn).await?;

    notify::emit(
        &txn,
        notify::BOOKING_UPDATED_BY_GARAGE_OWNER,
        &booking,
        garage.owner_id,
    )
    .await?;

    txn.commit().await?;

    let response = booking_response(&state.db, booking).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Set the booking status only; no price recomputation. Rejection of a
/// bid-originated booking reopens the linked pre-booking.
pub async fn change_booking_status(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ChangeBookingStatusRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    require_permission(&claims, "booking_update")?;

    let txn = state.db.begin().await?;

    let garage = garage_owner_check(&txn, &claims, payload.garage_id).await?;
    let booking = load_scoped_booking(&txn, payload.id, garage.id).await?;
    reject_if_terminal(&booking)?;

    // Conversion happens only through confirm; it cannot be set directly.
    if payload.status.is_terminal() {
        return Err(AppError::field(
            "status",
            "status can not be set to converted_to_job directly",
        ));
    }

    let mut active: booking::ActiveModel = booking.into();
    active.status = Set(payload.status.clone());
    let booking = active.update(&txn).await?;

    if booking.status == BookingStatus::RejectedByGarageOwner {
        reopen_pre_booking(&txn, &booking).await?;
        notify::emit(
            &txn,
            notify::BOOKING_REJECTED_BY_GARAGE_OWNER,
            &booking,
            garage.owner_id,
        )
        .await?;
    } else {
        notify::emit(
            &txn,
            notify::BOOKING_STATUS_CHANGED_BY_GARAGE_OWNER,
            &booking,
            garage.owner_id,
        )
        .await?;
    }

    txn.commit().await?;

    let response = booking_response(&state.db, booking).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Confirm a booking. Garage-owner-originated bookings are immediately
/// materialized into a job and locked in the terminal state; customer-side
/// bookings stay confirmed and convert through a separate path.
pub async fn confirm_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ConfirmBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    require_permission(&claims, "booking_update")?;

    let txn = state.db.begin().await?;

    let garage = garage_owner_check(&txn, &claims, payload.garage_id).await?;
    let booking = load_scoped_booking(&txn, payload.id, garage.id).await?;
    reject_if_terminal(&booking)?;

    let mut active: booking::ActiveModel = booking.into();
    if let Some(job_start_date) = payload.job_start_date {
        active.job_start_date = Set(job_start_date);
    }
    if let Some(job_start_time) = payload.job_start_time {
        active.job_start_time = Set(job_start_time);
    }
    if let Some(job_end_time) = payload.job_end_time {
        active.job_end_time = Set(job_end_time);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(discount_type) = payload.discount_type {
        active.discount_type = Set(Some(discount_type));
    }
    if let Some(discount_amount) = payload.discount_amount {
        active.discount_amount = Set(Some(discount_amount));
    }
    active.status = Set(BookingStatus::Confirmed);
    let booking = active.update(&txn).await?;

    // Both discounts are read from the booking's stored fields, not from the
    // request, and taken against the same base.
    let mut active: booking::ActiveModel = booking.clone().into();
    active.final_price = Set(pricing::compose_final_price(
        booking.price,
        booking.discount_type.as_ref(),
        booking.discount_amount,
        booking.coupon_discount_type.as_ref(),
        booking.coupon_discount_amount,
    ));
    let mut booking = active.update(&txn).await?;

    notify::emit(
        &txn,
        notify::BOOKING_CONFIRMED_BY_GARAGE_OWNER,
        &booking,
        garage.owner_id,
    )
    .await?;

    if booking.created_from == CreatedFrom::GarageOwnerSide {
        job::ActiveModel {
            id: Set(Uuid::new_v4()),
            booking_id: Set(booking.id),
            garage_id: Set(booking.garage_id),
            customer_id: Set(booking.customer_id),
            automobile_make_id: Set(booking.automobile_make_id),
            automobile_model_id: Set(booking.automobile_model_id),
            car_registration_no: Set(booking.car_registration_no.clone()),
            car_registration_year: Set(booking.car_registration_year.clone()),
            additional_information: Set(booking.additional_information.clone()),
            fuel: Set(booking.fuel.clone()),
            transmission: Set(booking.transmission.clone()),
            job_start_date: Set(booking.job_start_date),
            job_start_time: Set(booking.job_start_time),
            job_end_time: Set(booking.job_end_time),
            discount_type: Set(booking.discount_type.clone()),
            discount_amount: Set(booking.discount_amount),
            coupon_discount_type: Set(booking.coupon_discount_type.clone()),
            coupon_discount_amount: Set(booking.coupon_discount_amount),
            price: Set(booking.price),
            final_price: Set(booking.final_price),
            status: Set(JobStatus::Pending),
            payment_status: Set(PaymentStatus::Due),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut active: booking::ActiveModel = booking.into();
        active.status = Set(BookingStatus::ConvertedToJob);
        booking = active.update(&txn).await?;
    }

    txn.commit().await?;

    let response = booking_response(&state.db, booking).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// List bookings of the garage, newest first. Job-converted bookings are
/// surfaced through the job entity instead and never appear here.
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(garage_id): Path<Uuid>,
    Query(params): Query<ListBookingsQuery>,
) -> AppResult<Json<BookingListResponse>> {
    require_permission(&claims, "booking_view")?;
    let garage = garage_owner_check(&state.db, &claims, garage_id).await?;

    let mut query = booking::Entity::find()
        .filter(booking::Column::GarageId.eq(garage.id))
        .filter(booking::Column::Status.ne(BookingStatus::ConvertedToJob));

    if let Some(search_key) = params.search_key.as_deref().filter(|s| !s.is_empty()) {
        query = query.filter(booking::Column::CarRegistrationNo.contains(search_key));
    }
    if let Some(start_date) = params.start_date {
        query = query
            .filter(booking::Column::CreatedAt.gte(start_date.and_time(NaiveTime::MIN).and_utc()));
    }
    if let Some(end) = params
        .end_date
        .and_then(|d| d.checked_add_days(Days::new(1)))
    {
        query = query.filter(booking::Column::CreatedAt.lt(end.and_time(NaiveTime::MIN).and_utc()));
    }

    let per_page = params.per_page.unwrap_or(10).clamp(1, 100);
    let page = params.page.unwrap_or(1).max(1);

    let paginator = query
        .order_by_desc(booking::Column::CreatedAt)
        .paginate(&state.db, per_page);
    let total = paginator.num_items().await?;
    let bookings = paginator.fetch_page(page - 1).await?;

    let mut data = Vec::with_capacity(bookings.len());
    for b in bookings {
        data.push(booking_response(&state.db, b).await?);
    }

    Ok(Json(BookingListResponse {
        data,
        total,
        page,
        per_page,
    }))
}

/// Get one booking with its line items.
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((garage_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<BookingResponse>> {
    require_permission(&claims, "booking_view")?;
    let garage = garage_owner_check(&state.db, &claims, garage_id).await?;

    let booking = load_scoped_booking(&state.db, id, garage.id).await?;
    let response = booking_response(&state.db, booking).await?;
    Ok(Json(response))
}

/// Hard-delete a booking. Line items cascade at the storage layer; a linked
/// pre-booking is reopened exactly as on rejection.
pub async fn delete_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((garage_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<serde_json::Value>> {
    require_permission(&claims, "booking_delete")?;

    let txn = state.db.begin().await?;

    let garage = garage_owner_check(&txn, &claims, garage_id).await?;
    let booking = load_scoped_booking(&txn, id, garage.id).await?;
    reject_if_terminal(&booking)?;

    reopen_pre_booking(&txn, &booking).await?;

    notify::emit(
        &txn,
        notify::BOOKING_DELETED_BY_GARAGE_OWNER,
        &booking,
        garage.owner_id,
    )
    .await?;

    booking::Entity::delete_by_id(booking.id).exec(&txn).await?;

    txn.commit().await?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn booking_with_status(status: BookingStatus) -> booking::Model {
        booking::Model {
            id: Uuid::new_v4(),
            garage_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            automobile_make_id: Uuid::new_v4(),
            automobile_model_id: Uuid::new_v4(),
            car_registration_no: "AB12 CDE".to_string(),
            car_registration_year: "2021".to_string(),
            additional_information: None,
            fuel: None,
            transmission: None,
            job_start_date: NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(),
            job_start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            job_end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            expert_id: None,
            booked_slots: BookedSlots::default(),
            status,
            price: 50.0,
            discount_type: None,
            discount_amount: None,
            coupon_code: None,
            coupon_discount_type: None,
            coupon_discount_amount: None,
            final_price: 50.0,
            pre_booking_id: None,
            created_from: CreatedFrom::GarageOwnerSide,
            created_by: Uuid::new_v4(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn converted_booking_rejects_mutation() {
        let booking = booking_with_status(BookingStatus::ConvertedToJob);
        let err = reject_if_terminal(&booking).unwrap_err();
        assert!(matches!(err, AppError::StateConflict(_)));
    }

    #[test]
    fn non_terminal_statuses_allow_mutation() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::RejectedByClient,
            BookingStatus::RejectedByGarageOwner,
        ] {
            assert!(reject_if_terminal(&booking_with_status(status)).is_ok());
        }
    }
}
