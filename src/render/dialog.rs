//! Dialogs

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Color, Style, Theme, object::Rows},
};

use crate::{pages::Dialog, render::RenderError};

/// Write a framed dialog: title, separator, body.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_dialog(out: &mut impl io::Write, dialog: &Dialog) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record([dialog.title.as_str()]);
    builder.push_record([dialog.body.as_str()]);

    let mut table = builder.build();
    let mut theme = Theme::from(Style::rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), None, Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "\n{table}")?;

    Ok(())
}
