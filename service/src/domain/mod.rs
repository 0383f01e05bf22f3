//! Domain definitions.

pub mod account;
pub mod booking;
pub mod faq;
pub mod listing;

pub use self::{booking::Booking, faq::Faq, listing::Listing};

/// Defines a validated text newtype.
///
/// Values must not be empty, must not start or end with whitespace and must
/// not be longer than the provided number of bytes.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        $name:ident(max = $max:literal)
    ) => {
        #[doc = $doc]
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            PartialEq,
        )]
        #[as_ref(forward)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given \
                 `value` is valid.",
            )]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                Self::check(&value).then_some(Self(value))
            }

            #[doc = concat!(
                "Checks whether the given `value` is a valid [`",
                stringify!($name),
                "`].",
            )]
            fn check(value: impl AsRef<str>) -> bool {
                let value = value.as_ref();
                value.trim() == value
                    && !value.is_empty()
                    && value.len() <= $max
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
                    .ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}
use define_text;
