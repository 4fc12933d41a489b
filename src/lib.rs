//! Minimarket
//!
//! A small storefront: a product catalog read from a spreadsheet and a
//! shopping cart persisted as one JSON entry in a key-value store.
//!
//! All cart access goes through [`store::CartStore`]; the pages in [`pages`]
//! only forward user actions to it and redraw from the state it returns.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod format;
pub mod locale;
pub mod numeric;
pub mod observability;
pub mod pages;
pub mod prelude;
pub mod render;
pub mod storage;
pub mod store;
