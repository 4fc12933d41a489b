//! Reading the catalog from a real workbook.
//!
//! `fixtures/catalog.xlsx` holds a "Products" sheet followed by an "Archive"
//! sheet. Numbers are stored as plain numeric cells, the way spreadsheet
//! programs save them.

use std::path::PathBuf;

use rust_decimal::Decimal;
use testresult::TestResult;

use minimarket::prelude::*;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.xlsx")
}

#[test]
fn first_worksheet_is_normalized_into_products() -> TestResult {
    let products = load_products(&fixture())?;

    assert_eq!(
        products,
        vec![
            ProductRecord {
                id: "7".to_string(),
                name: "Bread".to_string(),
                price: Decimal::from(1500),
                image_ref: "img/bread.png".to_string(),
            },
            ProductRecord {
                id: "A-1".to_string(),
                name: "Jam".to_string(),
                price: Decimal::new(25, 1),
                image_ref: String::new(),
            },
            ProductRecord {
                id: "12".to_string(),
                name: String::new(),
                price: Decimal::ZERO,
                image_ref: String::new(),
            },
        ]
    );

    Ok(())
}

#[test]
fn later_worksheets_are_ignored() -> TestResult {
    let products = load_products(&fixture())?;

    assert!(products.iter().all(|product| product.id != "99"));

    Ok(())
}

#[test]
fn catalog_view_reports_loaded_count() {
    let view = CatalogView::load(&fixture());

    assert_eq!(view.status(), CatalogStatus::Loaded(3));
    assert_eq!(view.find(" 7 ").map(|product| product.name.as_str()), Some("Bread"));
}
