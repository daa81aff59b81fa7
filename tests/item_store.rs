mod common;

use basket::list::{Adjustment, ItemStore, QuantityExpr};
use basket::BasketError;

use common::store_with;

fn names(store: &ItemStore) -> Vec<&str> {
    store.snapshot().iter().map(|item| item.name.as_str()).collect()
}

fn adjust(store: &mut ItemStore, name: &str, raw: &str) -> Result<Adjustment, BasketError> {
    let expr = QuantityExpr::parse(raw)?;
    store.adjust(name, expr)
}

#[test]
fn count_equals_distinct_names_added() {
    let mut store = ItemStore::new();
    for name in ["milk", "bread", "milk", "eggs", "bread", "milk"] {
        store.add(name).unwrap();
    }
    assert_eq!(store.len(), 3);
    assert_eq!(store.total_quantity(), Some(6));
}

#[test]
fn adding_twice_increments_instead_of_duplicating() {
    let mut store = ItemStore::new();
    assert_eq!(store.add("milk"), Ok(1));
    assert_eq!(store.add("milk"), Ok(2));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("milk"), Some(2));
}

#[test]
fn blank_name_is_rejected_without_mutation() {
    let mut store = store_with(&[("tea", 1)]);
    assert_eq!(store.add(""), Err(BasketError::EmptyName));
    assert_eq!(store.add("   "), Err(BasketError::EmptyName));
    assert_eq!(store.len(), 1);
}

#[test]
fn names_are_case_sensitive() {
    let mut store = ItemStore::new();
    store.add("Milk").unwrap();
    store.add("milk").unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn insertion_order_is_display_order() {
    let store = store_with(&[("tea", 1), ("apples", 2), ("bread", 1)]);
    assert_eq!(names(&store), vec!["tea", "apples", "bread"]);
}

#[test]
fn remove_existing_then_not_found() {
    let mut store = store_with(&[("tea", 2), ("milk", 1)]);
    assert_eq!(store.remove("tea"), Ok(()));
    assert_eq!(names(&store), vec!["milk"]);
    assert_eq!(store.remove("tea"), Err(BasketError::not_found("tea")));
    assert_eq!(store.remove("tea"), Err(BasketError::not_found("tea")));
}

#[test]
fn adjust_missing_item_is_not_found() {
    let mut store = ItemStore::new();
    assert_eq!(
        adjust(&mut store, "tea", "+1"),
        Err(BasketError::not_found("tea"))
    );
}

#[test]
fn adjust_relative_add() {
    let mut store = store_with(&[("tea", 3)]);
    assert_eq!(adjust(&mut store, "tea", "+5"), Ok(Adjustment::Updated(8)));
    assert_eq!(store.get("tea"), Some(8));
}

#[test]
fn adjust_absolute_set() {
    let mut store = store_with(&[("tea", 3)]);
    assert_eq!(adjust(&mut store, "tea", "10"), Ok(Adjustment::Updated(10)));
    assert_eq!(store.get("tea"), Some(10));
}

#[test]
fn adjust_to_zero_literal_removes() {
    let mut store = store_with(&[("tea", 3)]);
    assert_eq!(adjust(&mut store, "tea", "0"), Ok(Adjustment::Removed));
    assert!(!store.contains("tea"));
}

#[test]
fn subtracting_current_quantity_or_more_removes() {
    let mut store = store_with(&[("tea", 3), ("milk", 1)]);
    assert_eq!(adjust(&mut store, "tea", "-3"), Ok(Adjustment::Removed));
    assert_eq!(adjust(&mut store, "milk", "-1"), Ok(Adjustment::Removed));
    assert!(store.is_empty());

    let mut store = store_with(&[("tea", 3)]);
    assert_eq!(adjust(&mut store, "tea", "-100"), Ok(Adjustment::Removed));
    assert!(store.is_empty());
}

#[test]
fn invalid_quantity_leaves_store_unchanged() {
    let mut store = store_with(&[("tea", 3)]);
    let before = store.clone();
    assert!(matches!(
        adjust(&mut store, "tea", "abc"),
        Err(BasketError::InvalidQuantity { .. })
    ));
    assert!(matches!(
        adjust(&mut store, "tea", "+0"),
        Err(BasketError::InvalidQuantity { .. })
    ));
    assert_eq!(store, before);
}

#[test]
fn overflowing_add_is_rejected() {
    let mut store = store_with(&[("tea", 1)]);
    adjust(&mut store, "tea", &i64::MAX.to_string()).unwrap();
    assert!(matches!(
        adjust(&mut store, "tea", "+1"),
        Err(BasketError::InvalidQuantity { .. })
    ));
    assert_eq!(store.get("tea"), Some(i64::MAX));
}

#[test]
fn add_at_max_quantity_is_rejected() {
    let mut store = store_with(&[("tea", 1)]);
    adjust(&mut store, "tea", &i64::MAX.to_string()).unwrap();
    assert!(matches!(
        store.add("tea"),
        Err(BasketError::InvalidQuantity { .. })
    ));
    assert_eq!(store.get("tea"), Some(i64::MAX));
}

#[test]
fn total_quantity_overflow_is_none() {
    let mut store = store_with(&[("a", 1), ("b", 1)]);
    adjust(&mut store, "a", &i64::MAX.to_string()).unwrap();
    adjust(&mut store, "b", &i64::MAX.to_string()).unwrap();
    assert_eq!(store.total_quantity(), None);
    assert_eq!(store.len(), 2);
}

#[test]
fn rename_keeps_quantity_and_position() {
    let mut store = store_with(&[("milk", 2), ("tea", 1), ("eggs", 6)]);
    store.rename("tea", "green tea").unwrap();
    assert_eq!(names(&store), vec!["milk", "green tea", "eggs"]);
    assert_eq!(store.get("green tea"), Some(1));
    assert!(!store.contains("tea"));
}

#[test]
fn rename_onto_existing_name_is_duplicate() {
    let mut store = store_with(&[("milk", 2), ("bread", 1)]);
    let before = store.clone();
    assert_eq!(
        store.rename("milk", "bread"),
        Err(BasketError::duplicate("bread"))
    );
    assert_eq!(store, before);
}

#[test]
fn rename_missing_or_blank() {
    let mut store = store_with(&[("milk", 1)]);
    assert_eq!(
        store.rename("tea", "coffee"),
        Err(BasketError::not_found("tea"))
    );
    assert_eq!(store.rename("milk", " "), Err(BasketError::EmptyName));
    assert_eq!(store.get("milk"), Some(1));
}

#[test]
fn rename_to_same_name_is_noop() {
    let mut store = store_with(&[("milk", 2)]);
    assert_eq!(store.rename("milk", "milk"), Ok(()));
    assert_eq!(store.get("milk"), Some(2));
}

#[test]
fn eggs_scenario() {
    let mut store = ItemStore::new();
    store.add("eggs").unwrap();
    assert_eq!(store.get("eggs"), Some(1));
    store.add("eggs").unwrap();
    assert_eq!(store.get("eggs"), Some(2));
    assert_eq!(adjust(&mut store, "eggs", "-2"), Ok(Adjustment::Removed));
    assert!(store.is_empty());
}
