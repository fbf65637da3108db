use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Service category a garage offers; sub-services hang off it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub garage_id: Uuid,
    pub service_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::garage::Entity",
        from = "Column::GarageId",
        to = "super::garage::Column::Id"
    )]
    Garage,
    #[sea_orm(has_many = "super::garage_sub_service::Entity")]
    SubServices,
}

impl Related<super::garage_sub_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubServices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
