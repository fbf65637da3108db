use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A sub-service as offered by one garage. `price` is the default rate;
/// make-specific overrides live in `sub_service_price`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage_sub_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub garage_service_id: Uuid,
    pub sub_service_id: Uuid,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::garage_service::Entity",
        from = "Column::GarageServiceId",
        to = "super::garage_service::Column::Id"
    )]
    GarageService,
    #[sea_orm(has_many = "super::sub_service_price::Entity")]
    Prices,
}

impl Related<super::garage_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GarageService.def()
    }
}

impl Related<super::sub_service_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
