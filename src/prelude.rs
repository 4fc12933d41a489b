//! Minimarket prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    catalog::{CatalogError, CatalogStatus, CatalogView, ProductRecord, load_products},
    format::format_price,
    locale::{Locale, Messages},
    numeric::numeric,
    pages::{CartPage, CatalogPage, Dialog, catalog::AddOutcome},
    render::RenderError,
    storage::{FileStorage, MemoryStorage, Storage, StorageError},
    store::{CART_KEY, CartStore, StoreError},
};
