use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::booking::DiscountType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coupon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub garage_id: Uuid,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_amount: f64,
    pub min_total: Option<f64>,
    pub max_total: Option<f64>,
    pub redemption_limit: Option<i32>,
    pub customer_redemptions: i32,
    pub is_active: bool,
    pub valid_from: Date,
    pub valid_until: Date,
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
