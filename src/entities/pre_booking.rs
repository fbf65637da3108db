use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "pre_booking_status")]
#[serde(rename_all = "snake_case")]
pub enum PreBookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "booked")]
    Booked,
}

/// Customer-initiated job request open for garage bids. Interacts with the
/// booking lifecycle only at rejection/deletion, which reopens it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pre_booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub automobile_make_id: Uuid,
    pub automobile_model_id: Uuid,
    pub car_registration_no: String,
    pub job_start_date: Date,
    pub status: PreBookingStatus,
    pub selected_bid_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job_bid::Entity")]
    Bids,
}

impl Related<super::job_bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
