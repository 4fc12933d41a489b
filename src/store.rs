//! Cart Store
//!
//! Owns the persisted cart and its mutation contract. Every read and write of
//! the cart key goes through [`CartStore`], so the quantity invariant (no line
//! with `qty <= 0` is ever written by a mutation) and numeric coercion live in
//! one place.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartLine},
    storage::{Storage, StorageError},
};

/// Storage key used by the storefront.
pub const CART_KEY: &str = "mini_market_cart_v1";

/// Errors raised while persisting the cart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The cart could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Cart persisted under a single storage key.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> CartStore<S> {
    /// Create a store using the default [`CART_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_KEY)
    }

    /// Create a store persisting under a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Storage key of the cart.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted cart.
    ///
    /// Never fails: a missing entry, an unreadable backend or malformed
    /// content all read as an empty cart.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(error) => {
                warn!(key = %self.key, %error, "failed to read cart; using an empty cart");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Cart::from_value(value),
            Err(error) => {
                warn!(key = %self.key, %error, "malformed cart; using an empty cart");
                Cart::new()
            }
        }
    }

    /// Persist the whole cart, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cart cannot be serialized or written.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;

        self.storage.set_item(&self.key, &raw)?;

        Ok(())
    }

    /// Add one unit of a product, creating its line when absent.
    ///
    /// An existing line keeps its stored name, price and image.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the updated cart cannot be persisted.
    pub fn add(
        &mut self,
        id: &str,
        unit_price: Decimal,
        name: &str,
        image_ref: &str,
    ) -> Result<Cart, StoreError> {
        let mut cart = self.load();

        let line = cart.entry_or_insert_with(id, || CartLine::new(id, name, unit_price, image_ref));
        line.qty = line.qty.max(0).saturating_add(1);

        debug!(%id, qty = line.qty, "added to cart");

        self.save(&cart)?;

        Ok(cart)
    }

    /// Change a line's quantity by `delta`, deleting it when the result is not positive.
    ///
    /// Does nothing, and writes nothing, when the product is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the updated cart cannot be persisted.
    pub fn change_qty(&mut self, id: &str, delta: i64) -> Result<Cart, StoreError> {
        let mut cart = self.load();

        let Some(line) = cart.get_mut(id) else {
            debug!(%id, "quantity change for product not in cart");
            return Ok(cart);
        };

        line.qty = line.qty.saturating_add(delta);

        if line.qty <= 0 {
            cart.remove(id);
            debug!(%id, "quantity dropped to zero; line removed");
        } else {
            debug!(%id, qty = line.qty, "quantity changed");
        }

        self.save(&cart)?;

        Ok(cart)
    }

    /// Delete a product's line.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the updated cart cannot be persisted.
    pub fn remove(&mut self, id: &str) -> Result<Cart, StoreError> {
        let mut cart = self.load();

        if cart.remove(id).is_some() {
            debug!(%id, "removed from cart");
        }

        self.save(&cart)?;

        Ok(cart)
    }

    /// Delete the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the entry cannot be removed.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove_item(&self.key)?;

        debug!(key = %self.key, "cart cleared");

        Ok(())
    }

    /// Sum of quantities in the persisted cart.
    pub fn count(&self) -> i64 {
        self.load().count()
    }

    /// Sum of `price × qty` in the persisted cart.
    pub fn total(&self) -> Decimal {
        self.load().total()
    }
}
