//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use std::num::NonZeroUsize;

use common::pagination;
use smart_default::SmartDefault;

#[cfg(doc)]
use infra::Catalog;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Number of [`domain::Listing`]s a listing page grows by.
    #[default(pagination::Arguments::DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroUsize,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<C> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Catalog`] of this [`Service`].
    catalog: C,
}

impl<C> Service<C> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub const fn new(config: Config, catalog: C) -> Self {
        Self { config, catalog }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Catalog`] of this [`Service`].
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }
}
