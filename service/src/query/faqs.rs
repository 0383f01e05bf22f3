//! [`Query`] collection related to the multiple [`Faq`]s.

use std::sync::Arc;

use common::operations::By;

use crate::domain::Faq;
#[cfg(doc)]
use crate::Query;

use super::CatalogQuery;

/// Queries all the [`Faq`]s in their declaration order.
pub type All = CatalogQuery<By<Arc<[Faq]>, ()>>;
