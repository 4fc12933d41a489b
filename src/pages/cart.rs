//! Cart page controller

use std::io;

use tracing::info;

use crate::{
    cart::Cart,
    locale::Messages,
    pages::Dialog,
    render::{RenderError, money, write_cart},
    storage::Storage,
    store::{CartStore, StoreError},
};

/// Cart lines with quantity controls, removal, clearing and checkout.
#[derive(Debug)]
pub struct CartPage<'a, S: Storage> {
    store: &'a mut CartStore<S>,
    messages: &'a Messages,
}

impl<'a, S: Storage> CartPage<'a, S> {
    /// Create the page.
    pub fn new(store: &'a mut CartStore<S>, messages: &'a Messages) -> Self {
        Self { store, messages }
    }

    /// Current cart.
    pub fn cart(&self) -> Cart {
        self.store.load()
    }

    /// The "+" control.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cart cannot be persisted.
    pub fn increase(&mut self, id: &str) -> Result<Cart, StoreError> {
        self.store.change_qty(id, 1)
    }

    /// The "−" control; a line reaching zero disappears.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cart cannot be persisted.
    pub fn decrease(&mut self, id: &str) -> Result<Cart, StoreError> {
        self.store.change_qty(id, -1)
    }

    /// The "Remove" control.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cart cannot be persisted.
    pub fn remove(&mut self, id: &str) -> Result<Cart, StoreError> {
        self.store.remove(id)
    }

    /// Empty the cart, confirming with a dialog.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the stored cart cannot be removed.
    pub fn clear(&mut self) -> Result<Dialog, StoreError> {
        let title = self.messages.text("dialog.cart.title");

        if self.store.count() == 0 {
            return Ok(Dialog::new(
                title,
                self.messages.text("dialog.clear.already_empty"),
            ));
        }

        self.store.clear()?;

        Ok(Dialog::new(title, self.messages.text("dialog.clear.done")))
    }

    /// Place the order: confirm with the total, then empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the stored cart cannot be removed.
    pub fn checkout(&mut self) -> Result<Dialog, StoreError> {
        let cart = self.store.load();
        let count = cart.count();

        if count == 0 {
            return Ok(Dialog::new(
                self.messages.text("dialog.cart.title"),
                self.messages.text("dialog.checkout.empty"),
            ));
        }

        let total = cart.total();

        self.store.clear()?;

        info!(lines = cart.len(), count, %total, "order placed");

        Ok(Dialog::new(
            self.messages.text("dialog.checkout.title"),
            self.messages.format(
                "dialog.checkout.done",
                &[("total", &money(total, self.messages))],
            ),
        ))
    }

    /// Draw the page from the stored cart.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the output cannot be written.
    pub fn render(&self, out: &mut impl io::Write) -> Result<(), RenderError> {
        write_cart(out, &self.store.load(), self.messages)
    }
}
