use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "job_bid_status")]
#[serde(rename_all = "snake_case")]
pub enum JobBidStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "canceled_after_booking")]
    CanceledAfterBooking,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_bid")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pre_booking_id: Uuid,
    pub garage_id: Uuid,
    pub price: f64,
    pub status: JobBidStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pre_booking::Entity",
        from = "Column::PreBookingId",
        to = "super::pre_booking::Column::Id"
    )]
    PreBooking,
}

impl Related<super::pre_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PreBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
