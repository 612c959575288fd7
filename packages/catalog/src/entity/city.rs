use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Select};
use serde::{Deserialize, Serialize};

/// City a card's product can be available in; deleting the parent region
/// takes its cities with it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub region_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Region,
    #[sea_orm(has_many = "super::ad::Entity")]
    Ad,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::ad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ad.def()
    }
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        super::card_city::Relation::Card.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::card_city::Relation::City.def().rev())
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
