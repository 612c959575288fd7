mod common;

use catalog::entity::{ad, card};
use catalog::error::CatalogError;
use sea_orm::{ActiveModelTrait, IntoActiveModel, Set};

#[tokio::test]
async fn card_name_shorter_than_five_chars_is_rejected() {
    let db = common::setup_db().await;

    let res = card::ActiveModel {
        name: Set("Cat".to_owned()),
        price: Set(5.0),
        ..Default::default()
    }
    .insert(&db)
    .await;

    let err = res.expect_err("three-character name must violate the check");
    assert!(matches!(
        CatalogError::from(err),
        CatalogError::Validation(_)
    ));
}

#[tokio::test]
async fn card_name_of_five_or_more_chars_is_accepted() {
    let db = common::setup_db().await;

    let model = card::ActiveModel {
        name: Set("Catalog".to_owned()),
        price: Set(5.0),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert card");

    assert_eq!(model.name, "Catalog");
    assert!(model.user_id.is_none());
}

#[tokio::test]
async fn ad_with_short_name_and_description_is_rejected() {
    let db = common::setup_db().await;

    let res = ad::ActiveModel {
        name: Set("Short".to_owned()),
        description: Set("too short".to_owned()),
        phone: Set("555".to_owned()),
        ..Default::default()
    }
    .insert(&db)
    .await;

    let err = res.expect_err("both length checks must reject this ad");
    assert!(matches!(
        CatalogError::from(err),
        CatalogError::Validation(_)
    ));
}

#[tokio::test]
async fn ad_meeting_both_length_checks_is_accepted() {
    let db = common::setup_db().await;

    let model = ad::ActiveModel {
        name: Set("Selling a used bike".to_owned()),
        description: Set("Barely ridden, great condition, selling today".to_owned()),
        phone: Set("555-1234".to_owned()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert ad");

    assert_eq!(model.name, "Selling a used bike");
    assert!(model.city_id.is_none());
}

#[tokio::test]
async fn ad_description_check_also_applies_on_update() {
    let db = common::setup_db().await;
    let model = common::insert_ad(&db, "Selling a used bike", None, None).await;

    let mut active = model.into_active_model();
    active.description = Set("too short".to_owned());
    let res = active.update(&db).await;

    let err = res.expect_err("shortening the description must be rejected");
    assert!(matches!(
        CatalogError::from(err),
        CatalogError::Validation(_)
    ));
}

#[tokio::test]
async fn ad_name_just_below_the_minimum_is_rejected() {
    let db = common::setup_db().await;

    let res = ad::ActiveModel {
        name: Set("Nine char".to_owned()),
        description: Set("A description comfortably over thirty characters".to_owned()),
        phone: Set("555-1234".to_owned()),
        ..Default::default()
    }
    .insert(&db)
    .await;

    res.expect_err("nine-character name must violate the check");
}
