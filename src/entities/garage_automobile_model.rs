use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Automobile model supported by a garage, scoped through the make pairing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "garage_automobile_model")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub garage_automobile_make_id: Uuid,
    pub automobile_model_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::garage_automobile_make::Entity",
        from = "Column::GarageAutomobileMakeId",
        to = "super::garage_automobile_make::Column::Id"
    )]
    Make,
}

impl Related<super::garage_automobile_make::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Make.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
