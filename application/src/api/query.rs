//! Read-only [`Command`]s.
//!
//! [`Command`]: crate::args::Command

use std::convert::Infallible;

use service::{
    domain::listing,
    query,
    read::listing::list::{Criteria, PriceRange},
    Query as _,
};

use crate::{args, browse::Browser, define_error, view, Context, Error};

/// Searches the listings, loading more of them the requested number of
/// times.
#[tracing::instrument(skip_all, fields(more = search.more))]
pub fn search(ctx: &Context, search: args::Search) -> String {
    let args::Search {
        location,
        property_type,
        min_price,
        amenities,
        guests,
        bedrooms,
        more,
    } = search;

    let mut browser = Browser::new(ctx.service(), ctx.initial_criteria());
    let mut page = browser.search(Criteria {
        location,
        property_type,
        price_range: PriceRange {
            min: min_price,
            max: ctx.price_ceiling(),
        },
        amenities,
        guests,
        bedrooms,
    });
    for _ in 0..more {
        if !browser.can_load_more() {
            break;
        }
        page = browser.load_more();
    }

    view::Results(&page).to_string()
}

/// Shows the details of the [`listing::Listing`] with the provided ID.
///
/// # Errors
///
/// Possible error codes:
/// - `LISTING_NOT_EXISTS` - the listing with the provided ID doesn't exist.
#[tracing::instrument(skip_all, fields(id = %id))]
pub fn show(ctx: &Context, id: &listing::Id) -> Result<String, Error> {
    let listing = listing_by_id(ctx, id.clone())?;
    Ok(view::Details(&listing).to_string())
}

/// Quotes a stay in a [`listing::Listing`].
///
/// # Errors
///
/// Possible error codes:
/// - `LISTING_NOT_EXISTS` - the listing with the provided ID doesn't exist.
#[tracing::instrument(skip_all, fields(id = %stay.id))]
pub fn quote(ctx: &Context, stay: args::Stay) -> Result<String, Error> {
    let args::Stay {
        id,
        check_in,
        check_out,
    } = stay;

    let listing = listing_by_id(ctx, id.clone())?;
    let quote = ctx
        .service()
        .execute(query::booking::Quote {
            listing_id: id,
            check_in,
            check_out,
        })
        .unwrap_or_else(|e: Infallible| match e {})
        .ok_or(ListingError::NotExists)?;

    Ok(view::Quote {
        listing: &listing,
        quote,
    }
    .to_string())
}

/// Lists the frequently asked questions.
#[tracing::instrument(skip_all)]
pub fn faq(ctx: &Context) -> String {
    let faqs = ctx
        .service()
        .execute(query::faqs::All::by(()))
        .unwrap_or_else(|e: Infallible| match e {});
    view::Faqs(&faqs).to_string()
}

/// Looks up the [`listing::Listing`] with the provided ID.
pub(crate) fn listing_by_id(
    ctx: &Context,
    id: listing::Id,
) -> Result<listing::Listing, Error> {
    ctx.service()
        .execute(query::listing::ById::by(id))
        .unwrap_or_else(|e: Infallible| match e {})
        .ok_or_else(|| ListingError::NotExists.into())
}

define_error! {
    enum ListingError {
        #[code = "LISTING_NOT_EXISTS"]
        #[message = "Listing with the provided ID does not exist"]
        NotExists,
    }
}

#[cfg(test)]
mod spec {
    use service::{domain::listing, infra::InMemory, Config};

    use crate::{args, Context, Service};

    fn ctx() -> Context {
        let service = Service::new(Config::default(), InMemory::sample());
        Context::new(service, 500_000)
    }

    fn search() -> args::Search {
        args::Search {
            location: String::new(),
            property_type: "Any".parse().unwrap(),
            min_price: 0,
            amenities: vec![],
            guests: 1,
            bedrooms: "Any".parse().unwrap(),
            more: 0,
        }
    }

    #[test]
    fn searches_by_location() {
        let out = super::search(
            &ctx(),
            args::Search {
                location: "ABUJA".into(),
                min_price: 80_000,
                ..search()
            },
        );

        assert!(out.starts_with("Showing 3 of 3 properties"));
        assert!(out.contains("#1 Serene Luxury Villa in Asokoro"));
        assert!(!out.contains("#2 "));
    }

    #[test]
    fn reports_nothing_found() {
        let out = super::search(
            &ctx(),
            args::Search {
                location: "Lagos".into(),
                ..search()
            },
        );

        assert!(out.starts_with("No properties match your current criteria."));
    }

    #[test]
    fn shows_unknown_listing_as_error() {
        let err = super::show(&ctx(), &listing::Id::new("404").unwrap())
            .unwrap_err();

        assert_eq!(err.code, "LISTING_NOT_EXISTS");
    }

    #[test]
    fn quotes_stay() {
        let out = super::quote(
            &ctx(),
            args::Stay {
                id: listing::Id::new("2").unwrap(),
                check_in: "2099-03-01".parse().unwrap(),
                check_out: "2099-03-04".parse().unwrap(),
            },
        )
        .unwrap();

        assert_eq!(out, "₦75,000 x 3 nights = ₦225,000");
    }

    #[test]
    fn lists_faqs() {
        let out = super::faq(&ctx());

        assert!(out.starts_with("Frequently Asked Questions\n"));
        assert_eq!(out.matches("\nQ: ").count(), 5);
    }
}
