//! [`Query`] collection related to a [`Booking`].

use std::convert::Infallible;

use common::operations::{By, Select};

#[cfg(doc)]
use crate::domain::Booking;
use crate::{
    domain::{booking, listing, Listing},
    infra::Catalog,
    Service,
};

use super::Query;

/// Queries a [`booking::Quote`] of staying in a [`Listing`] between the
/// provided dates.
///
/// Results in [`None`] if there is no such [`Listing`], and in an empty
/// [`booking::Quote`] if the dates don't form a valid stay.
#[derive(Clone, Debug)]
pub struct Quote {
    /// ID of the [`Listing`] to stay in.
    pub listing_id: listing::Id,

    /// Arrival date.
    pub check_in: booking::CheckInDate,

    /// Departure date.
    pub check_out: booking::CheckOutDate,
}

impl<C> Query<Quote> for Service<C>
where
    C: Catalog<
        Select<By<Option<Listing>, listing::Id>>,
        Ok = Option<Listing>,
        Err = Infallible,
    >,
{
    type Ok = Option<booking::Quote>;
    type Err = Infallible;

    fn execute(&self, query: Quote) -> Result<Self::Ok, Self::Err> {
        let Quote {
            listing_id,
            check_in,
            check_out,
        } = query;

        Ok(self
            .catalog()
            .execute(Select(By::new(listing_id)))?
            .map(|l| booking::Quote::new(&l, check_in, check_out)))
    }
}
