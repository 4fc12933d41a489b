//! Catalog page controller

use std::io;

use tracing::info;

use crate::{
    cart::Cart,
    catalog::{CatalogView, ProductRecord},
    locale::Messages,
    render::{RenderError, display_name, write_badge, write_catalog},
    storage::Storage,
    store::{CartStore, StoreError},
};

/// Result of an "add to cart" action.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The product was added; holds its record and the cart afterwards.
    Added(ProductRecord, Cart),

    /// No product with that id is listed.
    NotFound,
}

/// Product listing with an "add to cart" action.
#[derive(Debug)]
pub struct CatalogPage<'a, S: Storage> {
    store: &'a mut CartStore<S>,
    catalog: CatalogView,
    messages: &'a Messages,
}

impl<'a, S: Storage> CatalogPage<'a, S> {
    /// Create the page over a loaded catalog.
    pub fn new(store: &'a mut CartStore<S>, catalog: CatalogView, messages: &'a Messages) -> Self {
        Self {
            store,
            catalog,
            messages,
        }
    }

    /// Listed products.
    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    /// Add one unit of the listed product with `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cart cannot be persisted.
    pub fn add_to_cart(&mut self, id: &str) -> Result<AddOutcome, StoreError> {
        let Some(product) = self.catalog.find(id).cloned() else {
            info!(%id, "product not in catalog");
            return Ok(AddOutcome::NotFound);
        };

        let cart = self.store.add(
            &product.id,
            product.price,
            &product.name,
            &product.image_ref,
        )?;

        Ok(AddOutcome::Added(product, cart))
    }

    /// Draw the page.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the output cannot be written.
    pub fn render(&self, out: &mut impl io::Write) -> Result<(), RenderError> {
        write_catalog(
            out,
            self.catalog.products(),
            self.catalog.status(),
            self.store.count(),
            self.messages,
        )
    }

    /// Report an add action: the added product and the new badge, or the lookup miss.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the output cannot be written.
    pub fn render_add(
        &self,
        out: &mut impl io::Write,
        id: &str,
        outcome: &AddOutcome,
    ) -> Result<(), RenderError> {
        match outcome {
            AddOutcome::Added(product, cart) => {
                writeln!(
                    out,
                    "{}",
                    self.messages.format(
                        "catalog.added",
                        &[("name", display_name(&product.name, self.messages))]
                    )
                )?;
                write_badge(out, cart.count(), self.messages)
            }
            AddOutcome::NotFound => {
                writeln!(
                    out,
                    "{}",
                    self.messages.format("catalog.not_found", &[("id", id)])
                )?;

                Ok(())
            }
        }
    }
}
