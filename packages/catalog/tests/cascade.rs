mod common;

use catalog::entity::{ad, card, category_card, city, user};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

#[tokio::test]
async fn deleting_a_user_removes_owned_cards_and_ads() {
    let db = common::setup_db().await;
    let owner = common::insert_user(&db, "seller").await;
    let card = common::insert_card(&db, "Garden tools", 25.0, Some(owner.id)).await;
    let ad = common::insert_ad(&db, "Selling a used bike", Some(owner.id), None).await;

    user::Entity::delete_by_id(owner.id)
        .exec(&db)
        .await
        .expect("delete user");

    assert!(
        card::Entity::find_by_id(card.id)
            .one(&db)
            .await
            .expect("query card")
            .is_none()
    );
    assert!(
        ad::Entity::find_by_id(ad.id)
            .one(&db)
            .await
            .expect("query ad")
            .is_none()
    );
}

#[tokio::test]
async fn unowned_rows_survive_user_deletions() {
    let db = common::setup_db().await;
    let owner = common::insert_user(&db, "seller").await;
    let card = common::insert_card(&db, "Garden tools", 25.0, None).await;

    user::Entity::delete_by_id(owner.id)
        .exec(&db)
        .await
        .expect("delete user");

    assert!(
        card::Entity::find_by_id(card.id)
            .one(&db)
            .await
            .expect("query card")
            .is_some()
    );
}

#[tokio::test]
async fn deleting_a_city_detaches_ads_but_keeps_them() {
    let db = common::setup_db().await;
    let city = common::insert_city(&db, "Perm", None).await;
    let ad = common::insert_ad(&db, "Selling a used bike", None, Some(city.id)).await;

    city::Entity::delete_by_id(city.id)
        .exec(&db)
        .await
        .expect("delete city");

    let ad = ad::Entity::find_by_id(ad.id)
        .one(&db)
        .await
        .expect("query ad")
        .expect("ad must survive the city deletion");
    assert!(ad.city_id.is_none());
}

#[tokio::test]
async fn deleting_a_region_cascades_cities_and_detaches_ads() {
    let db = common::setup_db().await;
    let region = common::insert_region(&db, "Ural").await;
    let city = common::insert_city(&db, "Perm", Some(region.id)).await;
    let ad = common::insert_ad(&db, "Selling a used bike", None, Some(city.id)).await;

    catalog::entity::region::Entity::delete_by_id(region.id)
        .exec(&db)
        .await
        .expect("delete region");

    assert!(
        city::Entity::find_by_id(city.id)
            .one(&db)
            .await
            .expect("query city")
            .is_none()
    );
    let ad = ad::Entity::find_by_id(ad.id)
        .one(&db)
        .await
        .expect("query ad")
        .expect("ad must survive the cascade");
    assert!(ad.city_id.is_none());
}

#[tokio::test]
async fn deleting_a_card_removes_its_junction_rows() {
    let db = common::setup_db().await;
    let card = common::insert_card(&db, "Garden tools", 25.0, None).await;
    let category = common::insert_category(&db, "Tools", false).await;

    category_card::ActiveModel {
        category_id: Set(category.id),
        card_id: Set(card.id),
    }
    .insert(&db)
    .await
    .expect("link card to category");

    card::Entity::delete_by_id(card.id)
        .exec(&db)
        .await
        .expect("delete card");

    let links = category_card::Entity::find()
        .all(&db)
        .await
        .expect("query junction");
    assert!(links.is_empty());
}
