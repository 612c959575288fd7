use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marketplace classified listing. Shown only on marketplace pages; the
/// business keeps these immutable after creation (old ads only), though
/// the schema itself does not enforce that.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// At least 10 characters, enforced by a check constraint.
    pub name: String,
    /// At least 30 characters, enforced by a check constraint.
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub phone: String,
    pub image: Option<String>,
    pub user_id: Option<i32>,
    /// Nulled out when the city is deleted; the ad survives.
    pub city_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    City,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_ad::Relation::Category.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::category_ad::Relation::Ad.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
