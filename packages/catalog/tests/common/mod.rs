#![allow(dead_code)] // each test binary uses a subset of these helpers

use catalog::config::DatabaseConfig;
use catalog::database::init_db;
use catalog::entity::{ad, card, category, city, filter, parameter, region, user};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Fresh in-memory database with the full migration history applied.
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// pinned to a single connection.
pub async fn setup_db() -> DatabaseConnection {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".to_owned(),
        max_connections: 1,
        min_connections: 1,
    };
    init_db(&cfg).await.expect("initialize in-memory database")
}

pub async fn insert_user(db: &DatabaseConnection, username: &str) -> user::Model {
    user::ActiveModel {
        username: Set(username.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert user")
}

pub async fn insert_card(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    user_id: Option<i32>,
) -> card::Model {
    card::ActiveModel {
        name: Set(name.to_owned()),
        price: Set(price),
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert card")
}

pub async fn insert_ad(
    db: &DatabaseConnection,
    name: &str,
    user_id: Option<i32>,
    city_id: Option<i32>,
) -> ad::Model {
    ad::ActiveModel {
        name: Set(name.to_owned()),
        description: Set("Long enough description to satisfy the ad check".to_owned()),
        phone: Set("555-1234".to_owned()),
        user_id: Set(user_id),
        city_id: Set(city_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert ad")
}

pub async fn insert_region(db: &DatabaseConnection, name: &str) -> region::Model {
    region::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert region")
}

pub async fn insert_city(
    db: &DatabaseConnection,
    name: &str,
    region_id: Option<i32>,
) -> city::Model {
    city::ActiveModel {
        name: Set(name.to_owned()),
        region_id: Set(region_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert city")
}

pub async fn insert_category(db: &DatabaseConnection, name: &str, tag: bool) -> category::Model {
    category::ActiveModel {
        name: Set(name.to_owned()),
        tag: Set(tag),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert category")
}

pub async fn insert_filter(db: &DatabaseConnection, name: &str) -> filter::Model {
    filter::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert filter")
}

pub async fn insert_parameter(
    db: &DatabaseConnection,
    name: &str,
    filter_id: Option<i32>,
) -> parameter::Model {
    parameter::ActiveModel {
        name: Set(name.to_owned()),
        filter_id: Set(filter_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert parameter")
}
