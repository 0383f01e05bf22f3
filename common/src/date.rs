//! Calendar date utilities.

use std::{cmp::Ordering, fmt, marker::PhantomData, str::FromStr};

use derive_more::{Debug, Display, Error};
use time::macros::format_description;

/// Format of a [`Date`] in its textual representation (`YYYY-MM-DD`).
macro_rules! iso_date {
    () => {
        format_description!("[year]-[month]-[day]")
    };
}

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date (without a time of day).
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Returns the current date in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`Date`] out of the provided components.
    ///
    /// [`None`] is returned if the components do not form a valid date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        Some(Self {
            inner: time::Date::from_calendar_date(year, month, day).ok()?,
            _of: PhantomData,
        })
    }

    /// Parses a [`Date`] from its `YYYY-MM-DD` representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the `input` is not a valid `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let inner =
            time::Date::parse(input, iso_date!()).map_err(ParseError)?;
        Ok(Self {
            inner,
            _of: PhantomData,
        })
    }

    /// Returns the number of whole days from this [`Date`] to the `later`
    /// one.
    ///
    /// The result is negative if `later` is actually earlier.
    #[must_use]
    pub fn days_until<To: ?Sized>(&self, later: &DateOf<To>) -> i64 {
        (later.inner - self.inner).whole_days()
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid `YYYY-MM-DD` date: {_0}")]
pub struct ParseError(time::error::Parse);

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted =
            self.inner.format(iso_date!()).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}
