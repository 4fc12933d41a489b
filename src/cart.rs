//! Cart

use std::cmp::Ordering;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::numeric::{deserialize_decimal, deserialize_qty, deserialize_text, serialize_decimal};

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: String,

    /// Display name captured when the product was first added
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,

    /// Unit price
    #[serde(
        default,
        serialize_with = "serialize_decimal",
        deserialize_with = "deserialize_decimal"
    )]
    pub price: Decimal,

    /// Image reference (URL or path)
    #[serde(
        rename = "link",
        alias = "imageRef",
        default,
        deserialize_with = "deserialize_text"
    )]
    pub image_ref: String,

    /// Quantity in the cart
    #[serde(default, deserialize_with = "deserialize_qty")]
    pub qty: i64,
}

impl CartLine {
    /// Create a line with a zero quantity.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_ref: image_ref.into(),
            qty: 0,
        }
    }

    /// Set the quantity.
    #[must_use]
    pub fn with_qty(mut self, qty: i64) -> Self {
        self.qty = qty;
        self
    }

    /// Price multiplied by quantity.
    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.qty))
    }
}

/// Mapping from product identifier to cart line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: FxHashMap<String, CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from a persisted JSON value.
    ///
    /// Anything other than an object is an empty cart. Entries that are not
    /// objects are skipped; a line without an `id` takes the id of its key.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(entries) = value else {
            return Self::new();
        };

        let lines = entries
            .into_iter()
            .filter_map(|(key, entry)| match serde_json::from_value::<CartLine>(entry) {
                Ok(mut line) => {
                    if line.id.trim().is_empty() {
                        line.id.clone_from(&key);
                    }

                    Some((key, line))
                }
                Err(error) => {
                    debug!(%key, %error, "skipping unreadable cart line");
                    None
                }
            })
            .collect();

        Self { lines }
    }

    /// Get the line for a product.
    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Get the line for a product, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut CartLine> {
        self.lines.get_mut(id)
    }

    /// Get the line for a product, creating it with `qty = 0` when absent.
    pub fn entry_or_insert_with(
        &mut self,
        id: &str,
        line: impl FnOnce() -> CartLine,
    ) -> &mut CartLine {
        self.lines.entry(id.to_string()).or_insert_with(line)
    }

    /// Remove the line for a product.
    pub fn remove(&mut self, id: &str) -> Option<CartLine> {
        self.lines.remove(id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.lines.contains_key(id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in display order: integer-like ids ascending, then the rest by id.
    pub fn lines_in_display_order(&self) -> Vec<&CartLine> {
        let mut lines: Vec<&CartLine> = self.lines.values().collect();

        lines.sort_by(|a, b| display_order(&a.id, &b.id));

        lines
    }

    /// Sum of quantities across all lines.
    pub fn count(&self) -> i64 {
        self.lines
            .values()
            .fold(0_i64, |sum, line| sum.saturating_add(line.qty))
    }

    /// Sum of `price × qty` across all lines.
    pub fn total(&self) -> Decimal {
        self.lines
            .values()
            .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.subtotal()))
    }
}

impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self {
            lines: iter
                .into_iter()
                .map(|line| (line.id.clone(), line))
                .collect(),
        }
    }
}

fn display_order(a: &str, b: &str) -> Ordering {
    match (array_index(a), array_index(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Canonical non-negative integer keys (`"7"`, not `"07"` or `"+7"`).
fn array_index(id: &str) -> Option<u32> {
    let index = id.parse::<u32>().ok()?;

    (index.to_string() == id).then_some(index)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn bread() -> CartLine {
        CartLine::new("7", "Bread", Decimal::from(1500), "").with_qty(2)
    }

    #[test]
    fn count_and_total_sum_over_lines() {
        let cart: Cart = [
            bread(),
            CartLine::new("8", "Milk", Decimal::new(1250, 1), "milk.png").with_qty(3),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.count(), 5);
        assert_eq!(cart.total(), Decimal::new(33750, 1));
    }

    #[test]
    fn empty_cart_has_zero_count_and_total() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn from_value_coerces_non_numeric_fields_to_zero() {
        let cart = Cart::from_value(json!({
            "1": { "id": "1", "name": "Tea", "price": "abc", "qty": 4 },
            "2": { "id": "2", "name": "Jam", "price": 300, "qty": "lots" },
            "3": { "id": "3", "name": "Oil", "price": "50", "qty": "2" },
        }));

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.count(), 6);
        assert_eq!(cart.total(), Decimal::from(100));
    }

    #[test]
    fn from_value_fills_missing_id_from_key() {
        let cart = Cart::from_value(json!({ "7": { "qty": 2, "price": 1000 } }));

        let line = cart.get("7");

        assert_eq!(line.map(|line| line.id.as_str()), Some("7"));
        assert_eq!(line.map(|line| line.qty), Some(2));
    }

    #[test]
    fn from_value_skips_non_object_lines() {
        let cart = Cart::from_value(json!({ "1": 5, "2": { "qty": 1 } }));

        assert!(!cart.contains("1"));
        assert!(cart.contains("2"));
    }

    #[test]
    fn from_value_non_object_is_empty() {
        assert!(Cart::from_value(json!([1, 2, 3])).is_empty());
        assert!(Cart::from_value(Value::Null).is_empty());
        assert!(Cart::from_value(json!("cart")).is_empty());
    }

    #[test]
    fn image_ref_is_persisted_as_link() -> TestResult {
        let cart: Cart = [CartLine::new("1", "Tea", Decimal::from(10), "tea.png").with_qty(1)]
            .into_iter()
            .collect();

        let value = serde_json::to_value(&cart)?;

        assert_eq!(value["1"]["link"], json!("tea.png"));
        assert_eq!(value["1"]["price"], json!(10.0));

        Ok(())
    }

    #[test]
    fn high_precision_price_survives_serialization() -> TestResult {
        let price = Decimal::new(1_234_567_890_123_456_789, 5);
        let cart: Cart = [CartLine::new("1", "Gold", price, "").with_qty(1)]
            .into_iter()
            .collect();

        let value = serde_json::to_value(&cart)?;

        assert_eq!(value["1"]["price"], json!("12345678901234.56789"));
        assert_eq!(Cart::from_value(value), cart);

        Ok(())
    }

    #[test]
    fn image_ref_alias_is_accepted() {
        let cart = Cart::from_value(json!({ "1": { "imageRef": "a.png", "qty": 1 } }));

        assert_eq!(cart.get("1").map(|line| line.image_ref.as_str()), Some("a.png"));
    }

    #[test]
    fn display_order_puts_integer_ids_first() {
        let cart: Cart = ["b", "10", "2", "a", "01"]
            .into_iter()
            .map(|id| CartLine::new(id, id, Decimal::ONE, "").with_qty(1))
            .collect();

        let ids: Vec<&str> = cart
            .lines_in_display_order()
            .into_iter()
            .map(|line| line.id.as_str())
            .collect();

        assert_eq!(ids, ["2", "10", "01", "a", "b"]);
    }
}
