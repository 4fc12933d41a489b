//! Configuration
//!
//! Command-line flags with environment fallbacks. A `.env` file in the working
//! directory is read first.

use std::path::PathBuf;

use clap::Args;

use crate::{
    locale::Locale,
    storage::FileStorage,
    store::{CART_KEY, CartStore},
};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level or filter directives (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Cart storage settings.
#[derive(Debug, Clone, Args)]
pub struct StorageConfig {
    /// Directory holding persisted storage entries
    #[arg(long, env = "MINIMARKET_DATA_DIR", default_value = ".minimarket")]
    pub data_dir: PathBuf,

    /// Storage key of the cart
    #[arg(long, env = "MINIMARKET_CART_KEY", default_value = CART_KEY)]
    pub cart_key: String,
}

impl StorageConfig {
    /// Open the file-backed cart store described by these settings.
    pub fn open_store(&self) -> CartStore<FileStorage> {
        CartStore::with_key(FileStorage::new(&self.data_dir), &self.cart_key)
    }
}

/// Storefront settings shared by every command.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Product spreadsheet (.xlsx, .xls, .ods)
    #[arg(long, env = "MINIMARKET_CATALOG", default_value = "products.xlsx")]
    pub catalog: PathBuf,

    /// Display language
    #[arg(long, env = "MINIMARKET_LOCALE", default_value_t = Locale::En)]
    pub locale: Locale,

    /// Cart storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
