//! Localization
//!
//! Display strings are kept in one YAML table per locale, embedded at build
//! time. Nothing outside the renderers and page controllers looks at them.

use std::{fmt, str::FromStr};

use rustc_hash::FxHashMap;
use thiserror::Error;

const EN: &str = include_str!("en.yml");
const RU: &str = include_str!("ru.yml");

/// Errors raised while loading a message table.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The embedded table is not valid YAML.
    #[error("failed to parse {locale} messages: {source}")]
    Parse {
        /// Locale of the table
        locale: Locale,
        /// Underlying error
        #[source]
        source: serde_norway::Error,
    },
}

/// A locale tag that names no supported language.
#[derive(Debug, Error)]
#[error("unsupported locale {0:?} (expected en or ru)")]
pub struct UnknownLocale(String);

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English
    #[default]
    En,

    /// Russian
    Ru,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    /// Locale tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Parse a tag such as `ru`, `ru-RU` or `EN_us`.
    pub fn parse(tag: &str) -> Option<Self> {
        let language = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();

        match language.as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::En => EN,
            Self::Ru => RU,
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::parse(tag).ok_or_else(|| UnknownLocale(tag.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Table = FxHashMap<String, String>;

/// Message table for one locale, with English as the fallback.
#[derive(Debug, Clone)]
pub struct Messages {
    locale: Locale,
    entries: Table,
    fallback: Table,
}

impl Messages {
    /// Load the messages of a locale.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError`] if an embedded table cannot be parsed.
    pub fn for_locale(locale: Locale) -> Result<Self, LocaleError> {
        let entries = parse_table(locale)?;
        let fallback = if locale == Locale::En {
            Table::default()
        } else {
            parse_table(Locale::En)?
        };

        Ok(Self {
            locale,
            entries,
            fallback,
        })
    }

    /// Locale of the table.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a message. Unknown keys fall back to English, then to the key itself.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map_or(key, String::as_str)
    }

    /// Look up a message and substitute `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(key).to_string(), |message, (name, value)| {
                message.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Check whether the locale's own table defines `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys defined by the locale's own table.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn parse_table(locale: Locale) -> Result<Table, LocaleError> {
    serde_norway::from_str(locale.source()).map_err(|source| LocaleError::Parse { locale, source })
}
