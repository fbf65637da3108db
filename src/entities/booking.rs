use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Lifecycle states of a booking. `ConvertedToJob` is terminal: once a
/// booking reaches it, every mutating operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_status")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "rejected_by_client")]
    RejectedByClient,
    #[sea_orm(string_value = "rejected_by_garage_owner")]
    RejectedByGarageOwner,
    #[sea_orm(string_value = "converted_to_job")]
    ConvertedToJob,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::ConvertedToJob)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "discount_type")]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    #[sea_orm(string_value = "percentage")]
    Percentage,
    #[sea_orm(string_value = "flat")]
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "created_from")]
#[serde(rename_all = "snake_case")]
pub enum CreatedFrom {
    #[sea_orm(string_value = "garage_owner_side")]
    GarageOwnerSide,
    #[sea_orm(string_value = "customer_side")]
    CustomerSide,
}

/// A half-open time range `[start, end)` reserved against an expert on the
/// booking's service date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    pub start: Time,
    pub end: Time,
}

/// JSON column holding the ordered set of slots a booking reserves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct BookedSlots(pub Vec<SlotRange>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
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
    pub expert_id: Option<Uuid>,
    pub booked_slots: BookedSlots,
    pub status: BookingStatus,
    pub price: f64,
    pub discount_type: Option<DiscountType>,
    pub discount_amount: Option<f64>,
    pub coupon_code: Option<String>,
    pub coupon_discount_type: Option<DiscountType>,
    pub coupon_discount_amount: Option<f64>,
    pub final_price: f64,
    pub pre_booking_id: Option<Uuid>,
    pub created_from: CreatedFrom,
    pub created_by: Uuid,
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
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CustomerId",
        to = "super::user::Column::Id"
    )]
    Customer,
    #[sea_orm(has_many = "super::booking_sub_service::Entity")]
    BookingSubServices,
    #[sea_orm(has_many = "super::booking_package::Entity")]
    BookingPackages,
}

impl Related<super::booking_sub_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingSubServices.def()
    }
}

impl Related<super::booking_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingPackages.def()
    }
}

impl Related<super::garage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Garage.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
