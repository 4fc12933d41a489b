use std::io;

use minimarket::{
    locale::Messages,
    pages::CartPage,
    render::{write_cart, write_dialog},
    storage::FileStorage,
    store::CartStore,
};

use super::CliError;

pub(super) enum Change<'a> {
    Inc(&'a str),
    Dec(&'a str),
    Remove(&'a str),
}

pub(super) fn show(
    out: &mut impl io::Write,
    store: &mut CartStore<FileStorage>,
    messages: &Messages,
) -> Result<(), CliError> {
    CartPage::new(store, messages).render(out)?;

    Ok(())
}

pub(super) fn change(
    out: &mut impl io::Write,
    store: &mut CartStore<FileStorage>,
    messages: &Messages,
    change: Change<'_>,
) -> Result<(), CliError> {
    let mut page = CartPage::new(store, messages);

    let cart = match change {
        Change::Inc(id) => page.increase(id)?,
        Change::Dec(id) => page.decrease(id)?,
        Change::Remove(id) => page.remove(id)?,
    };

    write_cart(out, &cart, messages)?;

    Ok(())
}

pub(super) fn clear(
    out: &mut impl io::Write,
    store: &mut CartStore<FileStorage>,
    messages: &Messages,
) -> Result<(), CliError> {
    let mut page = CartPage::new(store, messages);

    let dialog = page.clear()?;

    page.render(out)?;
    write_dialog(out, &dialog)?;

    Ok(())
}

pub(super) fn checkout(
    out: &mut impl io::Write,
    store: &mut CartStore<FileStorage>,
    messages: &Messages,
) -> Result<(), CliError> {
    let mut page = CartPage::new(store, messages);

    let dialog = page.checkout()?;

    page.render(out)?;
    write_dialog(out, &dialog)?;

    Ok(())
}
