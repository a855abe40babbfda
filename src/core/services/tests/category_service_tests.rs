use rust_decimal_macros::dec;
use uuid::Uuid;

use super::store_with_user;
use crate::core::errors::EngineError;
use crate::core::services::{CategoryChanges, CategoryService};
use crate::domain::{User, DEFAULT_CATEGORIES};
use crate::storage::{LedgerStore, LedgerWriter};

#[test]
fn create_slugifies_and_rejects_duplicates() {
    let (store, user) = store_with_user();
    let pets = CategoryService::create(&store, user, "Pet Care", "Pet Care", Some("PawPrint"), None)
        .expect("create category");
    assert_eq!(pets.id, "pet-care");
    assert_eq!(pets.icon, "PawPrint");
    assert_eq!(pets.owner_id, Some(user));

    let err = CategoryService::create(&store, user, "pet care", "Again", None, None).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
    let err = CategoryService::create(&store, user, "Food", "Food", None, None).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn list_puts_defaults_first() {
    let (store, user) = store_with_user();
    CategoryService::create(&store, user, "aquarium", "Aquarium", None, None).unwrap();
    let listed = CategoryService::list(&store, user).unwrap();
    assert_eq!(listed.len(), DEFAULT_CATEGORIES.len() + 1);
    assert!(listed[..DEFAULT_CATEGORIES.len()].iter().all(|c| c.is_default));
    assert_eq!(listed.last().unwrap().id, "aquarium");
    assert_eq!(listed[0].label, "Bills & Utilities");
}

#[test]
fn default_budget_is_private_to_the_user() {
    let (store, user) = store_with_user();
    let other = User::new("Grace", "grace@example.com").unwrap();
    let other_id = other.id;
    store.insert_user(other).unwrap();

    let food = CategoryService::update(&store, user, "food", CategoryChanges::budget(Some(dec!(300))))
        .expect("set budget");
    assert_eq!(food.budget, Some(dec!(300)));
    assert!(food.is_default);

    let mine = CategoryService::list(&store, user).unwrap();
    assert_eq!(mine.iter().find(|c| c.id == "food").unwrap().budget, Some(dec!(300)));
    let theirs = CategoryService::list(&store, other_id).unwrap();
    assert_eq!(theirs.iter().find(|c| c.id == "food").unwrap().budget, None);
    assert_eq!(store.fetch_categories(other_id).unwrap().len(), DEFAULT_CATEGORIES.len());
}

#[test]
fn default_categories_only_accept_budgets() {
    let (store, user) = store_with_user();
    let changes = CategoryChanges {
        label: Some("Eating".into()),
        ..CategoryChanges::default()
    };
    let err = CategoryService::update(&store, user, "food", changes).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn budget_can_be_cleared_and_must_be_positive() {
    let (store, user) = store_with_user();
    CategoryService::create(&store, user, "games", "Games", None, None).unwrap();
    let err = CategoryService::update(&store, user, "games", CategoryChanges::budget(Some(dec!(-5))))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    CategoryService::update(&store, user, "games", CategoryChanges::budget(Some(dec!(50)))).unwrap();
    let cleared = CategoryService::update(&store, user, "games", CategoryChanges::budget(None)).unwrap();
    assert_eq!(cleared.budget, None);
}

#[test]
fn remove_refuses_defaults_and_unknown_keys() {
    let (store, user) = store_with_user();
    let err = CategoryService::remove(&store, user, "food").unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
    let err = CategoryService::remove(&store, user, "ghost").unwrap_err();
    assert!(matches!(err, EngineError::CategoryNotFound(_)));

    CategoryService::create(&store, user, "ghost", "Ghost", None, None).unwrap();
    CategoryService::remove(&store, user, "ghost").expect("remove custom");
}

#[test]
fn unknown_user_is_not_found() {
    let (store, _) = store_with_user();
    let err = CategoryService::list(&store, Uuid::new_v4()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn get_prefers_the_users_own_record() {
    let (store, user) = store_with_user();
    assert_eq!(CategoryService::get(&store, user, "Food").unwrap().label, "Food & Dining");

    CategoryService::update(&store, user, "food", CategoryChanges::budget(Some(dec!(40)))).unwrap();
    let food = CategoryService::get(&store, user, "food").unwrap();
    assert_eq!(food.owner_id, Some(user));
    assert_eq!(food.budget, Some(dec!(40)));

    CategoryService::create(&store, user, "Pet Care", "Pet Care", None, None).unwrap();
    assert_eq!(CategoryService::get(&store, user, "pet care").unwrap().id, "pet-care");

    let err = CategoryService::get(&store, user, "yachts").unwrap_err();
    assert!(matches!(err, EngineError::CategoryNotFound(ref key) if key == "yachts"));
}
