use std::collections::HashSet;

use super::*;
use crate::util::storage::{KeyValueStorage, MemoryStorage};

fn book(id: &str, price: f64) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Libro {id}"),
        price,
        ..Product::default()
    }
}

fn store_over(storage: &MemoryStorage) -> CartStore<MemoryStorage> {
    CartStore::new(storage.clone())
}

// =============================================================
// Pure cart operations
// =============================================================

#[test]
fn add_appends_new_line_with_quantity_one() {
    let mut cart = CartState::default();
    cart.add(book("a", 100.0));
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 1);
}

#[test]
fn add_twice_merges_into_one_line() {
    let mut cart = CartState::default();
    cart.add(book("a", 100.0));
    cart.add(book("a", 100.0));
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 2);
}

#[test]
fn add_keeps_original_snapshot() {
    let mut cart = CartState::default();
    cart.add(book("a", 100.0));
    // A later add with a changed price must not refresh the snapshot.
    cart.add(book("a", 175.0));
    assert_eq!(cart.lines[0].product.price, 100.0);
    assert_eq!(cart.lines[0].quantity, 2);
}

#[test]
fn lines_keep_insertion_order() {
    let mut cart = CartState::default();
    cart.add(book("a", 1.0));
    cart.add(book("b", 2.0));
    cart.add(book("c", 3.0));
    cart.set_quantity("a", 9);
    cart.add(book("b", 2.0));
    let ids: Vec<&str> = cart.lines.iter().map(|l| l.product.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn product_ids_stay_unique() {
    let mut cart = CartState::default();
    for id in ["a", "b", "a", "c", "b", "a"] {
        cart.add(book(id, 10.0));
    }
    let ids: HashSet<&str> = cart.lines.iter().map(|l| l.product.id.as_str()).collect();
    assert_eq!(ids.len(), cart.lines.len());
}

#[test]
fn set_quantity_clamps_to_one() {
    let mut cart = CartState::default();
    cart.add(book("a", 100.0));
    cart.set_quantity("a", 0);
    assert_eq!(cart.lines[0].quantity, 1);
    cart.set_quantity("a", -5);
    assert_eq!(cart.lines[0].quantity, 1);
    cart.set_quantity("a", 7);
    assert_eq!(cart.lines[0].quantity, 7);
}

#[test]
fn add_saturates_at_max_quantity() {
    let mut cart = CartState::default();
    cart.add(book("a", 100.0));
    // An oversized request saturates into u32; a later add must not wrap.
    cart.set_quantity("a", i64::MAX);
    assert_eq!(cart.lines[0].quantity, u32::MAX);
    cart.add(book("a", 100.0));
    assert_eq!(cart.lines[0].quantity, u32::MAX);
}

#[test]
fn set_quantity_never_removes() {
    let mut cart = CartState::default();
    cart.add(book("a", 100.0));
    cart.set_quantity("a", -100);
    assert_eq!(cart.lines.len(), 1);
}

#[test]
fn set_quantity_unknown_id_is_noop() {
    let mut cart = CartState::default();
    cart.add(book("a", 100.0));
    cart.set_quantity("missing", 5);
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 1);
}

#[test]
fn remove_deletes_only_that_line() {
    let mut cart = CartState::default();
    cart.add(book("a", 1.0));
    cart.add(book("b", 2.0));
    cart.remove("a");
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].product.id, "b");
    // Unknown id is a no-op.
    cart.remove("missing");
    assert_eq!(cart.lines.len(), 1);
}

#[test]
fn total_sums_price_times_quantity() {
    let mut cart = CartState::default();
    cart.add(book("a", 100.0));
    cart.set_quantity("a", 2);
    cart.add(book("b", 50.0));
    assert_eq!(cart.total(), 250.0);
}

#[test]
fn total_of_empty_cart_is_zero() {
    assert_eq!(CartState::default().total(), 0.0);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn mutations_write_through_to_storage() {
    let storage = MemoryStorage::default();
    let store = store_over(&storage);
    store.add(book("a", 100.0));

    let fresh = store_over(&storage);
    let cart = fresh.get_untracked();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].product.id, "a");
}

#[test]
fn quantity_and_removal_survive_reload() {
    let storage = MemoryStorage::default();
    let store = store_over(&storage);
    store.add(book("a", 100.0));
    store.add(book("b", 50.0));
    store.set_quantity("a", 3);
    store.remove("b");

    let cart = store_over(&storage).get_untracked();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 3);
}

#[test]
fn clear_erases_the_persisted_slot() {
    let storage = MemoryStorage::default();
    let store = store_over(&storage);
    store.add(book("a", 100.0));
    store.clear();

    assert!(store.get_untracked().is_empty());
    assert_eq!(storage.get(CART_KEY), None);
    assert!(store_over(&storage).get_untracked().is_empty());
}

#[test]
fn corrupt_persisted_cart_rehydrates_empty() {
    let storage = MemoryStorage::default();
    storage.set(CART_KEY, "{not valid json");
    assert!(store_over(&storage).get_untracked().is_empty());
}

#[test]
fn absent_slot_rehydrates_empty() {
    assert!(store_over(&MemoryStorage::default()).get_untracked().is_empty());
}
