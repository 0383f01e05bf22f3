//! Terminal views of the catalog.

pub mod amenity;

use std::fmt::{self, Write as _};

use common::Money;
use itertools::Itertools as _;
use service::{
    domain::{account::Welcome, booking, Booking, Faq, Listing},
    read::listing::list::Page,
};

pub use self::amenity::Icon;

/// [`Money`] amount shown with its currency sign and grouped thousands
/// (`₦150,000`).
///
/// Fractional part is omitted.
#[derive(Clone, Copy, Debug)]
pub struct Amount(pub Money);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Money { amount, currency } = self.0;

        if amount.is_sign_negative() && !amount.is_zero() {
            f.write_char('-')?;
        }
        f.write_str(currency.symbol())?;

        let digits = amount.trunc().abs().to_string();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                f.write_char(',')?;
            }
            f.write_char(c)?;
        }
        Ok(())
    }
}

/// Bedrooms of a [`Listing`], shown as `Studio` if there are none.
struct Bedrooms<'l>(&'l Listing);

impl fmt::Display for Bedrooms<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_studio() {
            f.write_str("Studio")
        } else {
            write!(f, "{} Beds", self.0.bedrooms)
        }
    }
}

/// Short card of a [`Listing`] shown in search results.
#[derive(Clone, Copy, Debug)]
pub struct Card<'l>(pub &'l Listing);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = self.0;

        writeln!(f, "#{} {}", l.id, l.name)?;
        writeln!(f, "   {} · {}", l.location, l.property_type)?;
        writeln!(f, "   {} / night", Amount(l.nightly_rate()))?;
        writeln!(
            f,
            "   {} · {} Baths · {} Guests",
            Bedrooms(l),
            l.bathrooms,
            l.guest_capacity,
        )?;
        write!(
            f,
            "   ★ {:.1} ({} reviews)",
            f32::from(l.rating),
            l.reviews_count,
        )
    }
}

/// [`Page`] of search results.
#[derive(Clone, Copy, Debug)]
pub struct Results<'p>(pub &'p Page);

impl fmt::Display for Results<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Page {
            nodes,
            total,
            has_more,
        } = self.0;

        if nodes.is_empty() {
            return f.write_str(
                "No properties match your current criteria. \
                 Try adjusting your filters!",
            );
        }

        writeln!(f, "Showing {} of {total} properties", nodes.len())?;
        for l in nodes {
            write!(f, "\n{}\n", Card(l))?;
        }
        if *has_more {
            write!(
                f,
                "\nMore properties available: use `--more` to load them",
            )?;
        }
        Ok(())
    }
}

/// Full details of a [`Listing`].
#[derive(Clone, Copy, Debug)]
pub struct Details<'l>(pub &'l Listing);

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = self.0;

        writeln!(f, "{}", l.name)?;
        writeln!(f, "{} · {}", l.location, l.property_type)?;
        writeln!(
            f,
            "{} / night · ★ {:.1} ({} reviews)",
            Amount(l.nightly_rate()),
            f32::from(l.rating),
            l.reviews_count,
        )?;
        writeln!(
            f,
            "{} · {} Baths · up to {} Guests",
            Bedrooms(l),
            l.bathrooms,
            l.guest_capacity,
        )?;

        writeln!(f, "\nImages:")?;
        for (n, image) in l.images.iter().enumerate() {
            let primary = if n == 0 { " (primary)" } else { "" };
            writeln!(f, "  {image}{primary}")?;
        }

        writeln!(f, "\n{}", l.description)?;

        writeln!(f, "\nAmenities:")?;
        for amenity in &l.amenities {
            writeln!(f, "  [{}] {amenity}", Icon::of(amenity))?;
        }

        if !l.house_rules.is_empty() {
            writeln!(f, "\nHouse Rules:")?;
            for rule in &l.house_rules {
                writeln!(f, "  - {rule}")?;
            }
        }

        write!(f, "\nMeet Your Host: {} ({})", l.host.name, l.host.avatar)
    }
}

/// List of [`Faq`]s.
#[derive(Clone, Copy, Debug)]
pub struct Faqs<'f>(pub &'f [Faq]);

impl fmt::Display for Faqs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequently Asked Questions")?;
        write!(
            f,
            "{}",
            self.0.iter().format_with("", |faq, f| {
                f(&format_args!("\nQ: {}\nA: {}\n", faq.question, faq.answer))
            }),
        )
    }
}

/// Price [`booking::Quote`] of a stay in a [`Listing`].
#[derive(Clone, Copy, Debug)]
pub struct Quote<'l> {
    /// [`Listing`] to stay in.
    pub listing: &'l Listing,

    /// [`booking::Quote`] of the stay.
    pub quote: booking::Quote,
}

impl fmt::Display for Quote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { listing, quote } = self;

        if quote.is_empty() {
            return f.write_str("Select valid dates to see the total price.");
        }
        write!(
            f,
            "{} x {} night{} = {}",
            Amount(listing.nightly_rate()),
            quote.nights,
            if quote.nights == 1 { "" } else { "s" },
            Amount(quote.total),
        )
    }
}

/// Notification shown to the user once a form is submitted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    /// Title of this [`Notification`].
    pub title: String,

    /// Description of this [`Notification`].
    pub description: String,
}

impl Notification {
    /// Creates a [`Notification`] about the provided [`Booking`] of the
    /// provided [`Listing`].
    #[must_use]
    pub fn booked(booking: &Booking, listing: &Listing) -> Self {
        let stay = format!(
            "{} to {}, {} guest(s), {}",
            booking.check_in,
            booking.check_out,
            booking.guests,
            Quote {
                listing,
                quote: booking.quote,
            },
        );
        match booking.status {
            booking::Status::Confirmed => Self {
                title: "Booking Confirmed!".into(),
                description: format!(
                    "Your booking for {} via card has been confirmed.\n\
                     {stay}",
                    listing.name,
                ),
            },
            booking::Status::Pending => Self {
                title: "Booking Initiated!".into(),
                description: format!(
                    "Your booking for {} is pending. Please check your email \
                     (simulated) for bank transfer instructions.\n{stay}",
                    listing.name,
                ),
            },
        }
    }

    /// Creates a [`Notification`] about the submitted account form.
    #[must_use]
    pub fn welcome(welcome: &Welcome) -> Self {
        let action = if welcome.full_name.is_some() {
            "Registration"
        } else {
            "Login"
        };
        Self {
            title: format!("{action} Successful!"),
            description: welcome.to_string(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.description)
    }
}
