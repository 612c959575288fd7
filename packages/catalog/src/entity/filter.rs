use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Select};
use serde::{Deserialize, Serialize};

/// Faceted-search filter grouping parameters and two card associations.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "filter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::parameter::Entity")]
    Parameter,
}

impl Related<super::parameter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parameter.def()
    }
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        super::filter_card::Relation::Card.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::filter_card::Relation::Filter.def().rev())
    }
}

/// The filter's second card association.
///
/// Declared under a category-sounding name but it links cards; kept as-is
/// for compatibility with existing data and resolved through the
/// `filter_category` junction.
#[derive(Debug)]
pub struct SecondaryCards;

impl Linked for SecondaryCards {
    type FromEntity = Entity;
    type ToEntity = super::card::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::filter_category::Relation::Filter.def().rev(),
            super::filter_category::Relation::Card.def(),
        ]
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
