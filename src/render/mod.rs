//! Terminal renderers
//!
//! Draw pages and dialogs as tables. Renderers only read the state they are
//! handed; they never touch the cart store.

use std::{io, ops::Range};

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{format::format_price, locale::Messages};

pub mod cart;
pub mod catalog;
pub mod dialog;

pub use cart::write_cart;
pub use catalog::write_catalog;
pub use dialog::write_dialog;

/// Errors raised while writing a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Write the cart-count indicator.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_badge(
    out: &mut impl io::Write,
    count: i64,
    messages: &Messages,
) -> Result<(), RenderError> {
    writeln!(
        out,
        "{}",
        messages.format("cart.badge", &[("count", &count.to_string())])
    )?;

    Ok(())
}

/// Format an amount followed by the currency label.
pub fn money(amount: Decimal, messages: &Messages) -> String {
    format!(
        "{} {}",
        format_price(amount, messages.locale()),
        messages.text("currency")
    )
}

/// Display name of a product, or the placeholder for unnamed ones.
pub(crate) fn display_name<'a>(name: &'a str, messages: &'a Messages) -> &'a str {
    if name.trim().is_empty() {
        messages.text("product.unnamed")
    } else {
        name
    }
}

/// Image reference of a product, or the placeholder when there is none.
pub(crate) fn display_image<'a>(image_ref: &'a str, messages: &'a Messages) -> &'a str {
    if image_ref.trim().is_empty() {
        messages.text("product.no_image")
    } else {
        image_ref
    }
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    right_aligned: Range<usize>,
) -> Result<(), RenderError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(right_aligned), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}
