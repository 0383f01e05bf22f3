//! Form submitting [`Command`]s.
//!
//! [`Command`]: crate::args::Command

use secrecy::SecretString;
use service::{command, Command as _};

use crate::{api::query, args, view, AsError, Context, Error};

/// Books a listing.
///
/// # Errors
///
/// Possible error codes:
/// - `LISTING_NOT_EXISTS` - the listing with the provided ID doesn't exist;
/// - `INVALID_DATES` - check-in date is in the past, or check-out date is
///                     not after it;
/// - `INVALID_GUESTS` - number of guests is zero or exceeds the capacity.
#[tracing::instrument(
    skip_all,
    fields(
        id = %book.stay.id,
        check_in = %book.stay.check_in,
        check_out = %book.stay.check_out,
        guests = book.guests,
        payment = %book.payment,
    ),
)]
pub fn book(ctx: &Context, book: args::Book) -> Result<String, Error> {
    let args::Book {
        stay:
            args::Stay {
                id,
                check_in,
                check_out,
            },
        guests,
        payment,
    } = book;

    let booking = ctx
        .service()
        .execute(command::BookListing {
            listing_id: id,
            check_in,
            check_out,
            guests,
            payment_method: payment,
        })
        .map_err(AsError::into_error)?;
    let listing = query::listing_by_id(ctx, booking.listing_id.clone())?;

    Ok(view::Notification::booked(&booking, &listing).to_string())
}

/// Submits the sign-in form.
///
/// # Errors
///
/// Possible error codes:
/// - `INVALID_EMAIL` - email address is malformed;
/// - `INVALID_PASSWORD` - password is too short.
#[tracing::instrument(skip_all, fields(email = %form.email))]
pub fn sign_in(ctx: &Context, form: args::SignIn) -> Result<String, Error> {
    let args::SignIn { email, password } = form;

    let welcome = ctx
        .service()
        .execute(command::SignIn {
            email,
            password: SecretString::from(password),
        })
        .map_err(AsError::into_error)?;

    Ok(view::Notification::welcome(&welcome).to_string())
}

/// Submits the sign-up form.
///
/// # Errors
///
/// Possible error codes:
/// - `INVALID_FULL_NAME` - full name is too short;
/// - `INVALID_EMAIL` - email address is malformed;
/// - `INVALID_PASSWORD` - password is too short;
/// - `PASSWORDS_MISMATCH` - repeated password differs.
#[tracing::instrument(
    skip_all,
    fields(email = %form.email, name = %form.name),
)]
pub fn sign_up(ctx: &Context, form: args::SignUp) -> Result<String, Error> {
    let args::SignUp {
        name,
        email,
        password,
        confirm,
    } = form;

    let welcome = ctx
        .service()
        .execute(command::SignUp {
            full_name: name,
            email,
            password: SecretString::from(password),
            confirmation: SecretString::from(confirm),
        })
        .map_err(AsError::into_error)?;

    Ok(view::Notification::welcome(&welcome).to_string())
}

#[cfg(test)]
mod spec {
    use service::{domain::listing, infra::InMemory, Config};

    use crate::{args, Context, Service};

    fn ctx() -> Context {
        let service = Service::new(Config::default(), InMemory::sample());
        Context::new(service, 500_000)
    }

    fn book(id: &str, guests: listing::NumGuests, payment: &str) -> args::Book {
        args::Book {
            stay: args::Stay {
                id: listing::Id::new(id).unwrap(),
                check_in: "2099-03-01".parse().unwrap(),
                check_out: "2099-03-04".parse().unwrap(),
            },
            guests,
            payment: payment.parse().unwrap(),
        }
    }

    #[test]
    fn confirms_card_booking() {
        let out = super::book(&ctx(), book("2", 2, "Card")).unwrap();

        assert!(out.starts_with("Booking Confirmed!\n"));
        assert!(out.contains("Modern Downtown Apartment via card"));
        assert!(out.contains("₦75,000 x 3 nights = ₦225,000"));
    }

    #[test]
    fn initiates_bank_transfer_booking() {
        let out = super::book(&ctx(), book("1", 8, "BankTransfer")).unwrap();

        assert!(out.starts_with("Booking Initiated!\n"));
        assert!(out.contains("bank transfer instructions"));
    }

    #[test]
    fn maps_booking_errors() {
        let err = super::book(&ctx(), book("2", 5, "Card")).unwrap_err();
        assert_eq!(err.code, "INVALID_GUESTS");
        assert_eq!(err.message, "Number of guests must be between 1 and 4.");

        let err = super::book(&ctx(), book("404", 1, "Card")).unwrap_err();
        assert_eq!(err.code, "LISTING_NOT_EXISTS");
    }

    #[test]
    fn welcomes_registered_user() {
        let out = super::sign_up(
            &ctx(),
            args::SignUp {
                name: "Ada Obi".into(),
                email: "ada@example.com".into(),
                password: "secret".into(),
                confirm: "secret".into(),
            },
        )
        .unwrap();

        assert_eq!(out, "Registration Successful!\nWelcome, Ada Obi!");
    }

    #[test]
    fn rejects_malformed_email() {
        let err = super::sign_in(
            &ctx(),
            args::SignIn {
                email: "ada".into(),
                password: "secret".into(),
            },
        )
        .unwrap_err();

        assert_eq!(err.code, "INVALID_EMAIL");
        assert_eq!(err.message, "Invalid email address.");
    }
}
