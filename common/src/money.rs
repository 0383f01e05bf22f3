//! [`Money`]-related definitions.

use std::{fmt, ops};

use rust_decimal::Decimal;

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] of the whole `amount` in the given
    /// [`Currency`].
    #[must_use]
    pub fn whole(amount: u32, currency: Currency) -> Self {
        Self {
            amount: Decimal::from(amount),
            currency,
        }
    }

    /// Returns zero [`Money`] in the given [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self {
            amount: self.amount * Decimal::from(rhs),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        write!(f, "{}{}", amount.normalize(), currency.code())
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Nigerian Naira."]
        Ngn = 1,
    }
}

impl Currency {
    /// Returns the ISO 4217 code of this [`Currency`].
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ngn => "NGN",
        }
    }

    /// Returns the sign commonly prepended to amounts in this [`Currency`].
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ngn => "₦",
        }
    }
}
