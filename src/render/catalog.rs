//! Catalog page

use std::io;

use tabled::builder::Builder;

use crate::{
    catalog::{CatalogStatus, ProductRecord},
    locale::Messages,
    render::{RenderError, display_image, display_name, money, write_badge, write_table},
};

/// Write the catalog page: status line, cart badge and product list.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_catalog(
    out: &mut impl io::Write,
    products: &[ProductRecord],
    status: CatalogStatus,
    cart_count: i64,
    messages: &Messages,
) -> Result<(), RenderError> {
    let status_line = match status {
        CatalogStatus::Loaded(count) => {
            messages.format("catalog.status.loaded", &[("count", &count.to_string())])
        }
        CatalogStatus::Failed => messages.text("catalog.status.failed").to_string(),
    };

    writeln!(out, "{status_line}")?;
    write_badge(out, cart_count, messages)?;
    writeln!(out)?;

    if products.is_empty() {
        writeln!(out, "{}", messages.text("catalog.empty"))?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record([
        messages.text("catalog.column.id"),
        messages.text("catalog.column.name"),
        messages.text("catalog.column.price"),
        messages.text("catalog.column.image"),
    ]);

    for product in products {
        builder.push_record([
            product.id.clone(),
            display_name(&product.name, messages).to_string(),
            money(product.price, messages),
            display_image(&product.image_ref, messages).to_string(),
        ]);
    }

    write_table(out, builder, 2..3)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::locale::Locale;

    fn render(products: &[ProductRecord], status: CatalogStatus) -> Result<String, RenderError> {
        let messages = Messages::for_locale(Locale::En).map_err(io::Error::other)?;
        let mut out = Vec::new();

        write_catalog(&mut out, products, status, 4, &messages)?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn lists_products_with_placeholders() -> TestResult {
        let products = [
            ProductRecord {
                id: "7".to_string(),
                name: "Bread".to_string(),
                price: Decimal::from(1500),
                image_ref: "bread.png".to_string(),
            },
            ProductRecord {
                id: "8".to_string(),
                name: String::new(),
                price: Decimal::ZERO,
                image_ref: String::new(),
            },
        ];

        let output = render(&products, CatalogStatus::Loaded(2))?;

        assert!(output.contains("Products: 2"));
        assert!(output.contains("Cart: 4"));
        assert!(output.contains("Bread"));
        assert!(output.contains("1,500 sum"));
        assert!(output.contains("bread.png"));
        assert!(output.contains("Unnamed product"));
        assert!(output.contains("No image"));

        Ok(())
    }

    #[test]
    fn failed_catalog_shows_status_and_empty_hint() -> TestResult {
        let output = render(&[], CatalogStatus::Failed)?;

        assert!(output.contains("Error loading products"));
        assert!(output.contains("No products found"));
        assert!(output.contains("Cart: 4"));

        Ok(())
    }
}
