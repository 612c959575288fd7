use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The filter's second card association. Links cards despite its name;
/// kept for compatibility with existing data and resolved from the filter
/// side via `filter::SecondaryCards`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "filter_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub filter_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub card_id: i32,
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
    #[sea_orm(
        belongs_to = "super::card::Entity",
        from = "Column::CardId",
        to = "super::card::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Card,
}

impl Related<super::filter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filter.def()
    }
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
