use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Select};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parameter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub filter_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::filter::Entity",
        from = "Column::FilterId",
        to = "super::filter::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Filter,
}

impl Related<super::filter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filter.def()
    }
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        super::parameter_card::Relation::Card.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::parameter_card::Relation::Parameter.def().rev())
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
