//! Cart store behaviour against file-backed storage.
//!
//! Each test runs in its own temporary data directory, so every scenario
//! starts from an empty store and reopens the store to observe what was
//! actually persisted.

use std::fs;

use rust_decimal::Decimal;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};
use testresult::TestResult;

use minimarket::prelude::*;

fn open(dir: &TempDir) -> CartStore<FileStorage> {
    CartStore::new(FileStorage::new(dir.path()))
}

fn persisted(dir: &TempDir) -> serde_json::Result<Value> {
    let raw = fs::read_to_string(dir.path().join(format!("{CART_KEY}.json")))
        .map_err(serde_json::Error::io)?;

    serde_json::from_str(&raw)
}

#[test]
fn first_add_persists_one_line() -> TestResult {
    let dir = tempdir()?;

    open(&dir).add("7", Decimal::from(1500), "Bread", "")?;

    let store = open(&dir);
    let expected: Cart = [CartLine::new("7", "Bread", Decimal::from(1500), "").with_qty(1)]
        .into_iter()
        .collect();

    assert_eq!(store.load(), expected);
    assert_eq!(store.count(), 1);
    assert_eq!(store.total(), Decimal::from(1500));

    assert_eq!(
        persisted(&dir)?,
        json!({ "7": { "id": "7", "name": "Bread", "price": 1500.0, "link": "", "qty": 1 } })
    );

    Ok(())
}

#[test]
fn repeated_adds_aggregate_on_one_line() -> TestResult {
    let dir = tempdir()?;

    for _ in 0..3 {
        open(&dir).add("X", Decimal::from(20), "Cheese", "cheese.jpg")?;
    }

    let cart = open(&dir).load();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get("X").map(|line| line.qty), Some(3));
    assert_eq!(cart.total(), Decimal::from(60));

    Ok(())
}

#[test]
fn decrement_to_zero_deletes_line() -> TestResult {
    let dir = tempdir()?;
    fs::write(
        dir.path().join(format!("{CART_KEY}.json")),
        r#"{"7":{"qty":2,"price":1000}}"#,
    )?;

    let mut store = open(&dir);

    store.change_qty("7", -1)?;
    assert_eq!(open(&dir).load().get("7").map(|line| line.qty), Some(1));

    store.change_qty("7", -1)?;
    assert!(!open(&dir).load().contains("7"));
    assert_eq!(open(&dir).count(), 0);
    assert_eq!(persisted(&dir)?, json!({}));

    Ok(())
}

#[test]
fn change_qty_on_absent_id_writes_nothing() -> TestResult {
    let dir = tempdir()?;

    let cart = open(&dir).change_qty("ghost", 5)?;

    assert!(cart.is_empty());
    assert_eq!(fs::read_dir(dir.path())?.count(), 0);

    Ok(())
}

#[test]
fn malformed_blob_loads_as_empty_cart() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join(format!("{CART_KEY}.json")), "this is not json")?;

    let mut store = open(&dir);

    assert!(store.load().is_empty());

    store.add("1", Decimal::from(5), "Tea", "")?;

    assert_eq!(open(&dir).count(), 1);

    Ok(())
}

#[test]
fn save_then_load_round_trips_through_disk() -> TestResult {
    let dir = tempdir()?;
    let cart: Cart = [
        CartLine::new("1", "Tea", Decimal::new(1999, 2), "tea.png").with_qty(2),
        CartLine::new("sku-9", "Jam", Decimal::from(300), "").with_qty(5),
    ]
    .into_iter()
    .collect();

    open(&dir).save(&cart)?;

    assert_eq!(open(&dir).load(), cart);

    Ok(())
}

#[test]
fn clear_removes_the_persisted_entry() -> TestResult {
    let dir = tempdir()?;
    let mut store = open(&dir);

    store.add("1", Decimal::from(5), "Tea", "")?;
    store.clear()?;

    assert!(open(&dir).load().is_empty());
    assert!(!dir.path().join(format!("{CART_KEY}.json")).exists());

    Ok(())
}
