//! Page controllers
//!
//! Each page turns user actions into cart store operations and redraws from
//! the state the store hands back. Pages hold no cart state of their own.

pub mod cart;
pub mod catalog;

pub use cart::CartPage;
pub use catalog::CatalogPage;

/// A confirmation message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    /// Dialog title
    pub title: String,

    /// Dialog body; may span several lines
    pub body: String,
}

impl Dialog {
    /// Create a dialog.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
