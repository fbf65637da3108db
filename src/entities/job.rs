use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::booking::DiscountType;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "job_status")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_status")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "due")]
    Due,
    #[sea_orm(string_value = "complete")]
    Complete,
}

/// Terminal artifact of a confirmed garage-owner booking. Owns its own
/// status and payment status, independent of the source booking.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub booking_id: Uuid,
    pub garage_id: Uuid,
    pub customer_id: Uuid,
    pub automobile_make_id: Uuid,
    pub automobile_model_id: Uuid,
    pub car_registration_no: String,
    pub car_registration_year: String,
    pub additional_information: Option<String>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub job_start_date: Date,
    pub job_start_time: Time,
    pub job_end_time: Time,
    pub discount_type: Option<DiscountType>,
    pub discount_amount: Option<f64>,
    pub coupon_discount_type: Option<DiscountType>,
    pub coupon_discount_amount: Option<f64>,
    pub price: f64,
    pub final_price: f64,
    pub status: JobStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::garage::Entity",
        from = "Column::GarageId",
        to = "super::garage::Column::Id"
    )]
    Garage,
}

impl ActiveModelBehavior for ActiveModel {}
