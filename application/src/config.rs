//! [`Config`]-related definitions.

use std::{num::NonZeroUsize, path::PathBuf};

use common::pagination;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::{domain::listing, read::listing::list::PriceRange};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog configuration.
    pub catalog: Catalog,

    /// Search configuration.
    pub search: Search,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Catalog configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Path to a JSON file to load the catalog from.
    ///
    /// The embedded sample catalog is used if not set.
    pub path: Option<PathBuf>,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Search {
    /// Number of listings a result page grows by.
    #[default(pagination::Arguments::DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroUsize,

    /// Highest nightly price the search form accepts.
    #[default(PriceRange::DEFAULT_CEILING)]
    pub price_ceiling: listing::Price,
}

impl From<Search> for service::Config {
    fn from(value: Search) -> Self {
        let Search {
            page_size,
            price_ceiling: _,
        } = value;
        Self { page_size }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
