use std::io;

use clap::{Parser, Subcommand};
use thiserror::Error;

use minimarket::{
    config::AppConfig,
    locale::{LocaleError, Messages},
    render::RenderError,
    store::StoreError,
};

mod cart;
mod catalog;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("no product with id {0:?} in the catalog")]
    ProductNotFound(String),
}

#[derive(Debug, Parser)]
#[command(name = "minimarket", about = "Minimarket storefront", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the products in the catalog
    Catalog,

    /// Add one unit of a catalog product to the cart
    Add {
        /// Product id
        id: String,
    },

    /// Show the cart
    Cart,

    /// Increase a line's quantity by one
    Inc {
        /// Product id
        id: String,
    },

    /// Decrease a line's quantity by one, removing it at zero
    Dec {
        /// Product id
        id: String,
    },

    /// Remove a line from the cart
    Remove {
        /// Product id
        id: String,
    },

    /// Empty the cart
    Clear,

    /// Place the order and empty the cart
    Checkout,
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), CliError> {
        let messages = Messages::for_locale(self.config.locale)?;
        let mut store = self.config.storage.open_store();
        let mut out = io::stdout().lock();

        match self.command {
            Commands::Catalog => catalog::show(&mut out, &mut store, &self.config, &messages),
            Commands::Add { id } => {
                catalog::add(&mut out, &mut store, &self.config, &messages, &id)
            }
            Commands::Cart => cart::show(&mut out, &mut store, &messages),
            Commands::Inc { id } => {
                cart::change(&mut out, &mut store, &messages, cart::Change::Inc(&id))
            }
            Commands::Dec { id } => {
                cart::change(&mut out, &mut store, &messages, cart::Change::Dec(&id))
            }
            Commands::Remove { id } => {
                cart::change(&mut out, &mut store, &messages, cart::Change::Remove(&id))
            }
            Commands::Clear => cart::clear(&mut out, &mut store, &messages),
            Commands::Checkout => cart::checkout(&mut out, &mut store, &messages),
        }
    }
}
