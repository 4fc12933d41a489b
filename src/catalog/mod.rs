//! Catalog
//!
//! Reads the product spreadsheet and normalizes its rows into
//! [`ProductRecord`]s for the catalog page.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::numeric::{numeric, text};

mod columns;

pub use columns::Columns;

/// Errors raised while reading a catalog spreadsheet.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The workbook could not be opened or a sheet could not be read.
    #[error("failed to read spreadsheet {path}: {source}")]
    Spreadsheet {
        /// Path of the workbook
        path: PathBuf,
        /// Underlying error
        #[source]
        source: calamine::Error,
    },

    /// The workbook has no worksheets.
    #[error("spreadsheet {0} has no worksheets")]
    NoWorksheets(PathBuf),
}

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Product identifier, never blank
    pub id: String,

    /// Display name, possibly empty
    pub name: String,

    /// Unit price; unparsable cells are zero
    pub price: Decimal,

    /// Image reference, possibly empty
    pub image_ref: String,
}

/// Read the first worksheet of a spreadsheet (`.xlsx`, `.xls`, `.ods`, ...).
///
/// # Errors
///
/// Returns a [`CatalogError`] if the workbook cannot be opened or has no worksheets.
pub fn load_products(path: &Path) -> Result<Vec<ProductRecord>, CatalogError> {
    let spreadsheet_error = |source: calamine::Error| CatalogError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_error)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CatalogError::NoWorksheets(path.to_path_buf()))?
        .map_err(spreadsheet_error)?;

    Ok(normalize_rows(range.rows().map(|row| {
        row.iter().map(cell_value).collect::<Vec<_>>()
    })))
}

/// Normalize spreadsheet rows into product records.
///
/// The first row is the header. Rows whose id is blank after string coercion
/// are dropped.
pub fn normalize_rows<I, R>(rows: I) -> Vec<ProductRecord>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[Value]>,
{
    let mut rows = rows.into_iter();

    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let columns = Columns::from_header(header.as_ref());

    rows.filter_map(|row| columns.record(row.as_ref()))
        .collect()
}

/// Convert a spreadsheet cell into the loosely-typed value a JSON export would hold.
pub fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Int(int) => Value::from(*int),
        Data::Float(float) => Value::from(*float),
        Data::String(string) | Data::DateTimeIso(string) | Data::DurationIso(string) => {
            Value::from(string.as_str())
        }
        Data::Bool(flag) => Value::from(*flag),
        Data::DateTime(date_time) => Value::from(date_time.as_f64()),
        Data::Error(_) | Data::Empty => Value::from(""),
    }
}

/// Outcome of loading the catalog for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    /// The spreadsheet was read; holds the number of products.
    Loaded(usize),

    /// The spreadsheet could not be read.
    Failed,
}

/// Products shown on the catalog page.
#[derive(Debug, Clone)]
pub struct CatalogView {
    products: Vec<ProductRecord>,
    status: CatalogStatus,
}

impl CatalogView {
    /// Load the catalog, degrading to an empty product list on failure.
    pub fn load(path: &Path) -> Self {
        match load_products(path) {
            Ok(products) => {
                info!(path = %path.display(), count = products.len(), "catalog loaded");
                Self::from_products(products)
            }
            Err(err) => {
                error!(error = %err, "failed to load catalog");
                Self {
                    products: Vec::new(),
                    status: CatalogStatus::Failed,
                }
            }
        }
    }

    /// Build a view from products already in hand.
    pub fn from_products(products: Vec<ProductRecord>) -> Self {
        let status = CatalogStatus::Loaded(products.len());

        Self { products, status }
    }

    /// Listed products, in spreadsheet order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Load outcome.
    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    /// Find a product by id, first exactly, then ignoring surrounding whitespace.
    pub fn find(&self, id: &str) -> Option<&ProductRecord> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .or_else(|| {
                let id = id.trim();
                self.products.iter().find(|product| product.id.trim() == id)
            })
    }
}

impl ProductRecord {
    pub(crate) fn from_cells(
        id: &Value,
        name: &Value,
        price: &Value,
        image_ref: &Value,
    ) -> Option<Self> {
        let id = text(id);

        if id.trim().is_empty() {
            return None;
        }

        Some(Self {
            id,
            name: text(name),
            price: numeric(price, Decimal::ZERO),
            image_ref: text(image_ref),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn normalizes_rows_under_lowercase_headers() {
        let products = normalize_rows([
            vec![json!("id"), json!("name"), json!("price"), json!("link")],
            vec![json!(7.0), json!("Bread"), json!(1500.0), json!("bread.png")],
            vec![json!("8"), json!("Milk"), json!("12 500"), json!("")],
        ]);

        assert_eq!(
            products,
            [
                ProductRecord {
                    id: "7".to_string(),
                    name: "Bread".to_string(),
                    price: Decimal::from(1500),
                    image_ref: "bread.png".to_string(),
                },
                ProductRecord {
                    id: "8".to_string(),
                    name: "Milk".to_string(),
                    price: Decimal::ZERO,
                    image_ref: String::new(),
                },
            ]
        );
    }

    #[test]
    fn drops_rows_with_blank_ids() {
        let products = normalize_rows([
            vec![json!("ID"), json!("Name")],
            vec![json!(""), json!("Nameless")],
            vec![json!("   "), json!("Spaces")],
            vec![json!(3), json!("Kept")],
        ]);

        assert_eq!(products.len(), 1);
        assert_eq!(products.first().map(|p| p.name.as_str()), Some("Kept"));
    }

    #[test]
    fn short_rows_read_missing_cells_as_empty() {
        let products = normalize_rows([
            vec![json!("Id"), json!("Name"), json!("Price"), json!("Link")],
            vec![json!("1")],
        ]);

        assert_eq!(products.len(), 1);
        assert_eq!(products.first().map(|p| p.price), Some(Decimal::ZERO));
        assert_eq!(products.first().map(|p| p.name.as_str()), Some(""));
    }

    #[test]
    fn empty_sheet_has_no_products() {
        assert!(normalize_rows(Vec::<Vec<Value>>::new()).is_empty());
        assert!(normalize_rows([vec![json!("id")]]).is_empty());
    }

    #[test]
    fn cells_convert_like_a_json_export() {
        assert_eq!(cell_value(&Data::Float(7.0)), json!(7.0));
        assert_eq!(cell_value(&Data::Int(3)), json!(3));
        assert_eq!(cell_value(&Data::String("x".into())), json!("x"));
        assert_eq!(cell_value(&Data::Bool(true)), json!(true));
        assert_eq!(cell_value(&Data::Empty), json!(""));
    }

    #[test]
    fn missing_file_degrades_to_failed_view() {
        let view = CatalogView::load(Path::new("definitely/not/here/products.xlsx"));

        assert_eq!(view.status(), CatalogStatus::Failed);
        assert!(view.products().is_empty());
    }

    #[test]
    fn find_matches_exact_then_trimmed_ids() {
        let view = CatalogView::from_products(vec![
            ProductRecord {
                id: " 12 ".to_string(),
                name: "Padded".to_string(),
                price: Decimal::ONE,
                image_ref: String::new(),
            },
            ProductRecord {
                id: "13".to_string(),
                name: "Plain".to_string(),
                price: Decimal::ONE,
                image_ref: String::new(),
            },
        ]);

        assert_eq!(view.find("13").map(|p| p.name.as_str()), Some("Plain"));
        assert_eq!(view.find("12").map(|p| p.name.as_str()), Some("Padded"));
        assert!(view.find("14").is_none());
        assert_eq!(view.status(), CatalogStatus::Loaded(2));
    }
}
