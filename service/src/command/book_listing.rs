//! [`Command`] for booking a [`Listing`].

use std::convert::Infallible;

use common::operations::{By, Select};
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{
        booking::{self, PaymentMethod, Quote},
        listing, Booking, Listing,
    },
    infra::Catalog,
    Service,
};

use super::Command;

/// [`Command`] for booking a [`Listing`].
///
/// Nothing is stored: the resulting [`Booking`] only describes the outcome.
#[derive(Clone, Debug)]
pub struct BookListing {
    /// ID of the [`Listing`] to book.
    pub listing_id: listing::Id,

    /// Arrival date.
    pub check_in: booking::CheckInDate,

    /// Departure date.
    pub check_out: booking::CheckOutDate,

    /// Number of guests staying.
    pub guests: listing::NumGuests,

    /// [`PaymentMethod`] to pay with.
    pub payment_method: PaymentMethod,
}

impl<C> Command<BookListing> for Service<C>
where
    C: Catalog<
        Select<By<Option<Listing>, listing::Id>>,
        Ok = Option<Listing>,
        Err = Infallible,
    >,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: BookListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let BookListing {
            listing_id,
            check_in,
            check_out,
            guests,
            payment_method,
        } = cmd;

        let Some(listing) = self
            .catalog()
            .execute(Select(By::new(listing_id.clone())))
            .unwrap_or_else(|e| match e {})
        else {
            return Err(tracerr::new!(E::ListingNotFound(listing_id)));
        };

        if check_in < booking::CheckInDate::today()
            || check_in.days_until(&check_out) <= 0
        {
            return Err(tracerr::new!(E::InvalidDates));
        }
        if guests == 0 || guests > listing.guest_capacity {
            return Err(tracerr::new!(E::InvalidGuests {
                capacity: listing.guest_capacity,
            }));
        }

        let booking = Booking {
            id: booking::Id::new(),
            quote: Quote::new(&listing, check_in, check_out),
            listing_id,
            check_in,
            check_out,
            guests,
            payment_method,
            status: payment_method.initial_status(),
        };

        match booking.status {
            booking::Status::Confirmed => tracing::info!(
                booking.id = %booking.id,
                listing.id = %booking.listing_id,
                nights = booking.quote.nights,
                total = %booking.quote.total,
                "booking for `{}` via {payment_method} has been confirmed",
                listing.name,
            ),
            booking::Status::Pending => tracing::info!(
                booking.id = %booking.id,
                listing.id = %booking.listing_id,
                nights = booking.quote.nights,
                total = %booking.quote.total,
                "booking for `{}` is pending, bank transfer instructions \
                 have been sent by email",
                listing.name,
            ),
        }

        Ok(booking)
    }
}

/// Error of [`BookListing`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Listing`] doesn't exist.
    #[display("Listing `{_0}` does not exist")]
    ListingNotFound(#[error(not(source))] listing::Id),

    /// Check-in date is in the past, or check-out date isn't after it.
    #[display("Please select valid check-in and check-out dates.")]
    InvalidDates,

    /// Number of guests exceeds the [`Listing`] capacity or is zero.
    #[display("Number of guests must be between 1 and {capacity}.")]
    InvalidGuests {
        /// Guest capacity of the [`Listing`].
        capacity: listing::NumGuests,
    },
}
