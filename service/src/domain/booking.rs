//! [`Booking`] definitions.

use common::{define_kind, unit, DateOf, Money};
use derive_more::{Display, From, Into};
use uuid::Uuid;

#[cfg(doc)]
use common::Date;

use super::{listing, Listing};

/// Simulated reservation of a [`Listing`].
///
/// [`Booking`]s are never stored: they only describe the outcome of a
/// submitted booking form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the booked [`Listing`].
    pub listing_id: listing::Id,

    /// [`Date`] of the arrival.
    pub check_in: CheckInDate,

    /// [`Date`] of the departure.
    pub check_out: CheckOutDate,

    /// Number of guests staying.
    pub guests: listing::NumGuests,

    /// [`Quote`] of this [`Booking`].
    pub quote: Quote,

    /// [`PaymentMethod`] chosen for this [`Booking`].
    pub payment_method: PaymentMethod,

    /// [`Status`] of this [`Booking`].
    pub status: Status,
}

/// ID of a [`Booking`].
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Into, PartialEq)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

/// Price of a stay in a [`Listing`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Number of nights of the stay.
    pub nights: u32,

    /// Total price of the stay.
    pub total: Money,
}

impl Quote {
    /// Quotes a stay in the provided [`Listing`].
    ///
    /// An empty [`Quote`] is returned if the `check_out` is not strictly
    /// after the `check_in`.
    #[must_use]
    pub fn new(
        listing: &Listing,
        check_in: CheckInDate,
        check_out: CheckOutDate,
    ) -> Self {
        let nights = u32::try_from(check_in.days_until(&check_out))
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or_default();
        Self {
            nights,
            total: listing.nightly_rate() * nights,
        }
    }

    /// Indicates whether this [`Quote`] covers no nights at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nights == 0
    }
}

define_kind! {
    #[doc = "Method of paying for a [`Booking`]."]
    enum PaymentMethod {
        #[doc = "Instant payment by a card."]
        Card = 1,

        #[doc = "Bank transfer, settled later."]
        BankTransfer = 2,
    }
}

impl PaymentMethod {
    /// Returns the [`Status`] a [`Booking`] paid this way starts with.
    #[must_use]
    pub const fn initial_status(self) -> Status {
        match self {
            Self::Card => Status::Confirmed,
            Self::BankTransfer => Status::Pending,
        }
    }
}

define_kind! {
    #[doc = "Status of a [`Booking`]."]
    enum Status {
        #[doc = "Paid and confirmed."]
        Confirmed = 1,

        #[doc = "Awaiting the payment to arrive."]
        Pending = 2,
    }
}

/// [`Date`] of arriving to a [`Listing`].
pub type CheckInDate = DateOf<(Booking, unit::CheckIn)>;

/// [`Date`] of leaving a [`Listing`].
pub type CheckOutDate = DateOf<(Booking, unit::CheckOut)>;
