use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Price-list entry. Populates a user's online store and the public
/// catalog; one user can add many of them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// At least 5 characters, enforced by a check constraint.
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price: f64,
    /// Path into the external asset store.
    pub image: Option<String>,
    pub user_id: Option<i32>,
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
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        super::card_city::Relation::City.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::card_city::Relation::Card.def().rev())
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_card::Relation::Category.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::category_card::Relation::Card.def().rev())
    }
}

impl Related<super::filter::Entity> for Entity {
    fn to() -> RelationDef {
        super::filter_card::Relation::Filter.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::filter_card::Relation::Card.def().rev())
    }
}

impl Related<super::parameter::Entity> for Entity {
    fn to() -> RelationDef {
        super::parameter_card::Relation::Parameter.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::parameter_card::Relation::Card.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
