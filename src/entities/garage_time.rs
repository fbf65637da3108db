use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Operating hours of a garage for one weekday (0 = Sunday .. 6 = Saturday).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage_time")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub garage_id: Uuid,
    pub day: i16,
    pub opening_time: Time,
    pub closing_time: Time,
    pub is_closed: bool,
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
