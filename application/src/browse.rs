//! [`Browser`] definitions.

use std::convert::Infallible;

use service::{
    query::listings::{HasMore, List},
    read::listing::list::{Arguments, Criteria, Page, Selector},
    Query as _,
};

use crate::Service;

/// State of browsing the listings: the [`Criteria`] of the last search and
/// the number of listings requested to be shown so far.
///
/// Every search replaces the [`Criteria`] wholesale and resets the shown
/// listings to a single page, while loading more reuses the stored
/// [`Criteria`].
#[derive(Debug)]
pub struct Browser<'s> {
    /// [`Service`] to query the listings from.
    service: &'s Service,

    /// [`Criteria`] of the last search.
    criteria: Criteria,

    /// Pagination [`Arguments`] of the shown listings.
    arguments: Arguments,
}

impl<'s> Browser<'s> {
    /// Starts browsing with the provided initial [`Criteria`].
    #[must_use]
    pub fn new(service: &'s Service, criteria: Criteria) -> Self {
        Self {
            arguments: Arguments::first(service.config().page_size),
            service,
            criteria,
        }
    }

    /// Returns the [`Criteria`] of the last search.
    #[must_use]
    pub const fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Searches the listings with the provided [`Criteria`], showing the
    /// first [`Page`] only.
    pub fn search(&mut self, criteria: Criteria) -> Page {
        tracing::debug!(?criteria, "new search");

        self.criteria = criteria;
        self.arguments = Arguments::first(self.arguments.page_size());
        self.page()
    }

    /// Grows the shown listings by one more page.
    pub fn load_more(&mut self) -> Page {
        self.arguments = self.arguments.more();
        self.page()
    }

    /// Returns the currently shown [`Page`].
    #[must_use]
    pub fn page(&self) -> Page {
        self.service
            .execute(List(Selector {
                arguments: self.arguments,
                filter: self.criteria.clone(),
            }))
            .unwrap_or_else(|e: Infallible| match e {})
    }

    /// Indicates whether more listings than the shown ones match the
    /// [`Criteria`] of the last search.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.service
            .execute(HasMore {
                criteria: self.criteria.clone(),
                shown: self.arguments.limit(),
            })
            .unwrap_or_else(|e: Infallible| match e {})
    }
}
