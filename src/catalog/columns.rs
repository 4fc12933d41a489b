//! Header columns

use serde_json::Value;

use crate::{catalog::ProductRecord, numeric::text};

const ID_ALIASES: [&str; 3] = ["id", "ID", "Id"];
const NAME_ALIASES: [&str; 3] = ["name", "Name", "NAME"];
const PRICE_ALIASES: [&str; 3] = ["price", "Price", "PRICE"];
const LINK_ALIASES: [&str; 3] = ["link", "Link", "LINK"];

static EMPTY: Value = Value::String(String::new());

/// Positions of the recognized columns in a header row.
///
/// Each field takes the first of its aliases present in the header; aliases
/// are matched exactly, so `iD` is not an id column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    id: Option<usize>,
    name: Option<usize>,
    price: Option<usize>,
    link: Option<usize>,
}

impl Columns {
    /// Resolve columns from a header row.
    pub fn from_header(header: &[Value]) -> Self {
        let headers: Vec<String> = header.iter().map(text).collect();

        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| headers.iter().position(|header| header == alias))
        };

        Self {
            id: find(&ID_ALIASES),
            name: find(&NAME_ALIASES),
            price: find(&PRICE_ALIASES),
            link: find(&LINK_ALIASES),
        }
    }

    /// Build a product from a data row, or `None` when its id is blank.
    pub fn record(&self, row: &[Value]) -> Option<ProductRecord> {
        let cell = |column: Option<usize>| column.and_then(|index| row.get(index)).unwrap_or(&EMPTY);

        ProductRecord::from_cells(
            cell(self.id),
            cell(self.name),
            cell(self.price),
            cell(self.link),
        )
    }
}
