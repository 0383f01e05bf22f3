//! [`Args`] definitions.

use clap::Parser;
use service::{
    domain::{booking, listing},
    read::listing::list::{BedroomFilter, PropertyTypeFilter},
};

/// Terminal front-end of the property rental catalog.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Searches listings matching the provided criteria.
    Search(Search),

    /// Shows details of a single listing.
    Show {
        /// ID of the listing to show.
        id: listing::Id,
    },

    /// Quotes a stay in a listing without booking it.
    Quote(Stay),

    /// Books a listing.
    Book(Book),

    /// Submits the sign-in form.
    SignIn(SignIn),

    /// Submits the sign-up form.
    SignUp(SignUp),

    /// Lists frequently asked questions.
    Faq,
}

/// Search criteria as typed in.
#[derive(Clone, Debug, clap::Args)]
pub struct Search {
    /// Part of a location to look for, in any case.
    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Property type (`Apartment`, `House`, `Villa`, `Penthouse` or `Any`).
    #[arg(short = 't', long = "type", default_value = "Any")]
    pub property_type: PropertyTypeFilter,

    /// Lowest nightly price.
    #[arg(long, default_value_t = 0)]
    pub min_price: listing::Price,

    /// Amenity a listing must offer (repeatable, case-sensitive).
    #[arg(short, long = "amenity")]
    pub amenities: Vec<listing::Amenity>,

    /// Minimal guest capacity (zero or less disables the filter).
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub guests: i32,

    /// Number of bedrooms (`Any`, `Studio`, `1`, `2`, `3` or `4+`).
    #[arg(short, long, default_value = "Any")]
    pub bedrooms: BedroomFilter,

    /// Number of times to load more listings after the first page.
    #[arg(long, default_value_t = 0)]
    pub more: usize,
}

/// Stay in a listing as typed in.
#[derive(Clone, Debug, clap::Args)]
pub struct Stay {
    /// ID of the listing to stay in.
    pub id: listing::Id,

    /// Arrival date (`YYYY-MM-DD`).
    #[arg(long)]
    pub check_in: booking::CheckInDate,

    /// Departure date (`YYYY-MM-DD`).
    #[arg(long)]
    pub check_out: booking::CheckOutDate,
}

/// Booking form as typed in.
#[derive(Clone, Debug, clap::Args)]
pub struct Book {
    /// [`Stay`] to book.
    #[command(flatten)]
    pub stay: Stay,

    /// Number of guests staying.
    #[arg(short, long, default_value_t = 1)]
    pub guests: listing::NumGuests,

    /// Payment method (`Card` or `BankTransfer`).
    #[arg(short, long, default_value = "Card")]
    pub payment: booking::PaymentMethod,
}

/// Sign-in form as typed in.
#[derive(Clone, Debug, clap::Args)]
pub struct SignIn {
    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Password.
    #[arg(long)]
    pub password: String,
}

/// Sign-up form as typed in.
#[derive(Clone, Debug, clap::Args)]
pub struct SignUp {
    /// Full name.
    #[arg(long)]
    pub name: String,

    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Password.
    #[arg(long)]
    pub password: String,

    /// Repeated password.
    #[arg(long)]
    pub confirm: String,
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use service::{
        domain::listing::PropertyType,
        read::listing::list::{BedroomFilter, PropertyTypeFilter},
    };

    use super::{Args, Command};

    #[test]
    fn parses_search_criteria() {
        let args = Args::try_parse_from([
            "stays", "search", "-l", "lekki", "--type", "Villa",
            "--min-price", "100000", "-a", "Pool", "-a", "WiFi", "-b", "4+",
            "--more", "2",
        ])
        .unwrap();

        let Command::Search(search) = args.command else {
            panic!("expected `search` command");
        };
        assert_eq!(args.config, "config.toml");
        assert_eq!(search.location, "lekki");
        assert_eq!(
            search.property_type,
            PropertyTypeFilter::Only(PropertyType::Villa),
        );
        assert_eq!(search.min_price, 100_000);
        assert_eq!(search.amenities.len(), 2);
        assert_eq!(search.guests, 1);
        assert_eq!(search.bedrooms, BedroomFilter::FourOrMore);
        assert_eq!(search.more, 2);
    }

    #[test]
    fn parses_booking_form() {
        let args = Args::try_parse_from([
            "stays", "book", "2", "--check-in", "2099-03-01",
            "--check-out", "2099-03-04", "-g", "2", "-p", "BankTransfer",
        ])
        .unwrap();

        let Command::Book(book) = args.command else {
            panic!("expected `book` command");
        };
        assert_eq!(book.stay.id.to_string(), "2");
        assert_eq!(book.stay.check_in.to_string(), "2099-03-01");
        assert_eq!(book.guests, 2);
        assert_eq!(book.payment.to_string(), "BankTransfer");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(Args::try_parse_from([
            "stays", "quote", "2", "--check-in", "01/03/2099",
            "--check-out", "2099-03-04",
        ])
        .is_err());
    }
}
