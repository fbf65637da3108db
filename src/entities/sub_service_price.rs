use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Make-specific price override for a garage sub-service.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_service_price")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub garage_sub_service_id: Uuid,
    pub automobile_make_id: Uuid,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::garage_sub_service::Entity",
        from = "Column::GarageSubServiceId",
        to = "super::garage_sub_service::Column::Id"
    )]
    GarageSubService,
}

impl Related<super::garage_sub_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GarageSubService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
