use std::io;

use minimarket::{
    catalog::CatalogView,
    config::AppConfig,
    locale::Messages,
    pages::{CatalogPage, catalog::AddOutcome},
    storage::FileStorage,
    store::CartStore,
};

use super::CliError;

pub(super) fn show(
    out: &mut impl io::Write,
    store: &mut CartStore<FileStorage>,
    config: &AppConfig,
    messages: &Messages,
) -> Result<(), CliError> {
    let page = CatalogPage::new(store, CatalogView::load(&config.catalog), messages);

    page.render(out)?;

    Ok(())
}

pub(super) fn add(
    out: &mut impl io::Write,
    store: &mut CartStore<FileStorage>,
    config: &AppConfig,
    messages: &Messages,
    id: &str,
) -> Result<(), CliError> {
    let mut page = CatalogPage::new(store, CatalogView::load(&config.catalog), messages);

    let outcome = page.add_to_cart(id)?;

    page.render_add(out, id, &outcome)?;

    match outcome {
        AddOutcome::Added(..) => Ok(()),
        AddOutcome::NotFound => Err(CliError::ProductNotFound(id.to_string())),
    }
}
