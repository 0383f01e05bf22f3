//! [`Listing`]-related read definitions.

#[cfg(doc)]
use crate::domain::Listing;

pub mod list {
    //! [`Listing`] list definitions.

    use std::{convert::Infallible, fmt, str::FromStr};

    use common::define_pagination;
    use smart_default::SmartDefault;

    use crate::domain::{listing, Listing};

    define_pagination!(Listing, Criteria);

    /// Search criteria filtering a [`Listing`] list.
    ///
    /// Every field has a value meaning "no filter", and [`Criteria::default()`]
    /// is made of those values only (except the [`Criteria::guests`] which the
    /// search form starts at `1`).
    #[derive(Clone, Debug, PartialEq, SmartDefault)]
    pub struct Criteria {
        /// Part of a [`listing::Location`] to look for, in any case.
        ///
        /// Empty means no filter.
        pub location: String,

        /// [`PropertyTypeFilter`] to apply.
        pub property_type: PropertyTypeFilter,

        /// [`PriceRange`] a nightly price must lie within.
        pub price_range: PriceRange,

        /// [`listing::Amenity`]s a [`Listing`] must offer all of.
        ///
        /// Empty means no filter.
        pub amenities: Vec<listing::Amenity>,

        /// Minimal guest capacity of a [`Listing`].
        ///
        /// Zero or less means no filter.
        #[default(1)]
        pub guests: i32,

        /// [`BedroomFilter`] to apply.
        pub bedrooms: BedroomFilter,
    }

    /// Filter by a [`listing::PropertyType`].
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum PropertyTypeFilter {
        /// Any [`listing::PropertyType`] is accepted.
        #[default]
        Any,

        /// Only the provided [`listing::PropertyType`] is accepted.
        Only(listing::PropertyType),
    }

    impl PropertyTypeFilter {
        /// Indicates whether this [`PropertyTypeFilter`] accepts the provided
        /// [`listing::PropertyType`].
        #[must_use]
        pub fn accepts(self, ty: listing::PropertyType) -> bool {
            match self {
                Self::Any => true,
                Self::Only(expected) => expected == ty,
            }
        }
    }

    impl FromStr for PropertyTypeFilter {
        type Err = &'static str;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if s == "Any" {
                return Ok(Self::Any);
            }
            s.parse()
                .map(Self::Only)
                .map_err(|_| "invalid `PropertyTypeFilter`")
        }
    }

    impl fmt::Display for PropertyTypeFilter {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Any => f.write_str("Any"),
                Self::Only(ty) => write!(f, "{ty}"),
            }
        }
    }

    /// Closed range of nightly prices.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
    pub struct PriceRange {
        /// Lowest accepted price.
        pub min: listing::Price,

        /// Highest accepted price.
        #[default(PriceRange::DEFAULT_CEILING)]
        pub max: listing::Price,
    }

    impl PriceRange {
        /// Highest price a search form starts with.
        pub const DEFAULT_CEILING: listing::Price = 500_000;

        /// Indicates whether the provided `price` lies within this
        /// [`PriceRange`] (bounds included).
        #[must_use]
        pub fn contains(&self, price: listing::Price) -> bool {
            (self.min..=self.max).contains(&price)
        }
    }

    impl fmt::Display for PriceRange {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }

    /// Filter by a number of bedrooms.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum BedroomFilter {
        /// Any number of bedrooms is accepted.
        #[default]
        Any,

        /// Only studios (no bedrooms) are accepted.
        Studio,

        /// Exactly the provided number of bedrooms is accepted.
        ///
        /// Negative or oversized numbers accept nothing.
        Exactly(i64),

        /// Four or more bedrooms are accepted.
        FourOrMore,
    }

    impl BedroomFilter {
        /// Indicates whether this [`BedroomFilter`] accepts the provided
        /// number of `bedrooms`.
        #[must_use]
        pub fn accepts(self, bedrooms: listing::NumBedrooms) -> bool {
            match self {
                Self::Any => true,
                Self::Studio => bedrooms == 0,
                Self::Exactly(n) => i64::from(bedrooms) == n,
                Self::FourOrMore => bedrooms >= 4,
            }
        }
    }

    impl FromStr for BedroomFilter {
        type Err = Infallible;

        /// Parses one of the `Any`, `Studio`, `4+` or numeric options.
        ///
        /// Numeric options are read up to their first non-digit character
        /// (so `2 bedrooms` means `2`). Anything not starting with a number
        /// degrades into [`BedroomFilter::Any`].
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(match s {
                "Any" => Self::Any,
                "Studio" => Self::Studio,
                "4+" => Self::FourOrMore,
                other => leading_int(other).map_or_else(
                    || {
                        tracing::debug!(
                            "unrecognized bedroom option `{other}` ignored",
                        );
                        Self::Any
                    },
                    Self::Exactly,
                ),
            })
        }
    }

    /// Parses the integer the provided `input` starts with, if any.
    ///
    /// Leading whitespace and a single sign are allowed. Numbers too large
    /// for [`i64`] saturate.
    fn leading_int(input: &str) -> Option<i64> {
        let input = input.trim_start();
        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        let n = unsigned[..len].parse::<i64>().unwrap_or(i64::MAX);
        Some(if negative { -n } else { n })
    }

    impl fmt::Display for BedroomFilter {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Any => f.write_str("Any"),
                Self::Studio => f.write_str("Studio"),
                Self::Exactly(n) => write!(f, "{n}"),
                Self::FourOrMore => f.write_str("4+"),
            }
        }
    }

    #[cfg(test)]
    mod spec {
        use crate::domain::listing::PropertyType;

        use super::{BedroomFilter, Criteria, PriceRange, PropertyTypeFilter};

        #[test]
        fn default_is_initial_form() {
            let criteria = Criteria::default();

            assert_eq!(criteria.location, "");
            assert_eq!(criteria.property_type, PropertyTypeFilter::Any);
            assert_eq!(
                criteria.price_range,
                PriceRange {
                    min: 0,
                    max: 500_000,
                },
            );
            assert!(criteria.amenities.is_empty());
            assert_eq!(criteria.guests, 1);
            assert_eq!(criteria.bedrooms, BedroomFilter::Any);
        }

        #[test]
        fn parses_bedroom_options() {
            for (input, expected) in [
                ("Any", BedroomFilter::Any),
                ("Studio", BedroomFilter::Studio),
                ("1", BedroomFilter::Exactly(1)),
                ("3", BedroomFilter::Exactly(3)),
                ("4+", BedroomFilter::FourOrMore),
                ("2.5", BedroomFilter::Exactly(2)),
                ("2 bedrooms", BedroomFilter::Exactly(2)),
                (" 3", BedroomFilter::Exactly(3)),
                ("-1", BedroomFilter::Exactly(-1)),
                ("70000", BedroomFilter::Exactly(70_000)),
                ("99999999999999999999", BedroomFilter::Exactly(i64::MAX)),
                ("lots", BedroomFilter::Any),
                ("-", BedroomFilter::Any),
                ("", BedroomFilter::Any),
            ] {
                assert_eq!(input.parse(), Ok(expected), "input: `{input}`");
            }
        }

        #[test]
        fn bedroom_filter_accepts() {
            assert!(BedroomFilter::Studio.accepts(0));
            assert!(!BedroomFilter::Studio.accepts(1));
            assert!(BedroomFilter::FourOrMore.accepts(4));
            assert!(BedroomFilter::FourOrMore.accepts(7));
            assert!(!BedroomFilter::FourOrMore.accepts(3));
            assert!(BedroomFilter::Exactly(2).accepts(2));
            assert!(!BedroomFilter::Exactly(2).accepts(3));
            assert!(!BedroomFilter::Exactly(-1).accepts(0));
            assert!(!BedroomFilter::Exactly(70_000).accepts(u16::MAX));
            assert!(BedroomFilter::Any.accepts(0));
        }

        #[test]
        fn parses_property_type_filter() {
            assert_eq!("Any".parse(), Ok(PropertyTypeFilter::Any));
            assert_eq!(
                "House".parse(),
                Ok(PropertyTypeFilter::Only(PropertyType::House)),
            );
            assert!("Castle".parse::<PropertyTypeFilter>().is_err());
            assert_eq!(PropertyTypeFilter::Any.to_string(), "Any");
        }

        #[test]
        fn price_range_is_inclusive() {
            let range = PriceRange {
                min: 75_000,
                max: 150_000,
            };

            assert!(range.contains(75_000));
            assert!(range.contains(150_000));
            assert!(!range.contains(74_999));
            assert!(!range.contains(150_001));
        }
    }
}
