//! Cart page

use std::io;

use tabled::builder::Builder;

use crate::{
    cart::Cart,
    locale::Messages,
    render::{RenderError, display_image, display_name, money, write_badge, write_table},
};

/// Write the cart page: badge, status line, lines and the running total.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_cart(
    out: &mut impl io::Write,
    cart: &Cart,
    messages: &Messages,
) -> Result<(), RenderError> {
    write_badge(out, cart.count(), messages)?;

    if cart.is_empty() {
        writeln!(out, "{}", messages.text("cart.status.empty"))?;
        writeln!(out, "{}", messages.text("cart.empty_hint"))?;
        write_total(out, cart, messages)?;

        return Ok(());
    }

    writeln!(
        out,
        "{}",
        messages.format("cart.status.items", &[("count", &cart.len().to_string())])
    )?;

    let mut builder = Builder::default();

    builder.push_record([
        messages.text("cart.column.id"),
        messages.text("cart.column.name"),
        messages.text("cart.column.price"),
        messages.text("cart.column.qty"),
        messages.text("cart.column.subtotal"),
        messages.text("cart.column.image"),
    ]);

    for line in cart.lines_in_display_order() {
        builder.push_record([
            line.id.clone(),
            display_name(&line.name, messages).to_string(),
            money(line.price, messages),
            line.qty.to_string(),
            money(line.subtotal(), messages),
            display_image(&line.image_ref, messages).to_string(),
        ]);
    }

    write_table(out, builder, 2..5)?;
    write_total(out, cart, messages)
}

fn write_total(
    out: &mut impl io::Write,
    cart: &Cart,
    messages: &Messages,
) -> Result<(), RenderError> {
    writeln!(
        out,
        "{}",
        messages.format("cart.total", &[("total", &money(cart.total(), messages))])
    )?;

    Ok(())
}
