use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Select};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Whether the category doubles as a tag.
    pub tag: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_card::Relation::Card.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::category_card::Relation::Category.def().rev())
    }
}

impl Related<super::ad::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_ad::Relation::Ad.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::category_ad::Relation::Category.def().rev())
    }
}

impl Entity {
    /// Listing order when no explicit sort is requested.
    pub fn find_ordered() -> Select<Entity> {
        Self::find().order_by_asc(Column::Name)
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
