//! [`Context`]-related definitions.

use service::{
    domain::listing,
    read::listing::list::{Criteria, PriceRange},
};

use crate::Service;

/// Application context.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// Highest nightly price the search form accepts.
    price_ceiling: listing::Price,
}

impl Context {
    /// Creates a new [`Context`] out of the provided [`Service`].
    #[must_use]
    pub const fn new(service: Service, price_ceiling: listing::Price) -> Self {
        Self {
            service,
            price_ceiling,
        }
    }

    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub const fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the highest nightly price the search form accepts.
    #[must_use]
    pub const fn price_ceiling(&self) -> listing::Price {
        self.price_ceiling
    }

    /// Returns the [`Criteria`] the search form starts with.
    #[must_use]
    pub fn initial_criteria(&self) -> Criteria {
        Criteria {
            price_range: PriceRange {
                min: 0,
                max: self.price_ceiling,
            },
            ..Criteria::default()
        }
    }
}
