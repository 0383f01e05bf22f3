//! Raw records of a [`Catalog`] source.
//!
//! [`Catalog`]: super::Catalog

use serde::Deserialize;

use crate::domain::{faq, listing, Faq, Listing};

use super::Error;

/// Whole [`Catalog`] source document.
///
/// [`Catalog`]: super::Catalog
#[derive(Debug, Deserialize)]
pub(super) struct Document {
    /// [`Listing`] records in their declaration order.
    pub(super) listings: Vec<ListingRecord>,

    /// [`Faq`] records in their declaration order.
    #[serde(default)]
    pub(super) faqs: Vec<FaqRecord>,
}

/// Raw [`Listing`] record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListingRecord {
    id: String,
    name: String,
    location: String,
    property_type: String,
    price_per_night: listing::Price,
    bedrooms: listing::NumBedrooms,
    bathrooms: listing::NumBathrooms,
    guests: listing::NumGuests,
    #[serde(default)]
    amenities: Vec<String>,
    images: Vec<String>,
    description: String,
    #[serde(default)]
    house_rules: Vec<String>,
    host: HostRecord,
    rating: f32,
    #[serde(default)]
    reviews_count: listing::ReviewsCount,
}

/// Raw [`listing::Host`] record.
#[derive(Debug, Deserialize)]
struct HostRecord {
    name: String,
    avatar: String,
}

/// Raw [`Faq`] record.
#[derive(Debug, Deserialize)]
pub(super) struct FaqRecord {
    id: String,
    question: String,
    answer: String,
}

/// Parses a validated value out of a raw `field` of the `record`.
fn field<T>(
    record: &str,
    field: &'static str,
    value: Option<T>,
) -> Result<T, Error> {
    value.ok_or_else(|| Error::InvalidField {
        record: record.to_owned(),
        field,
    })
}

/// Parses all the validated values out of a raw `field` of the `record`.
fn fields<T>(
    record: &str,
    name: &'static str,
    values: Vec<String>,
    parse: impl Fn(String) -> Option<T>,
) -> Result<Vec<T>, Error> {
    values
        .into_iter()
        .map(|v| field(record, name, parse(v)))
        .collect()
}

impl TryFrom<ListingRecord> for Listing {
    type Error = Error;

    fn try_from(record: ListingRecord) -> Result<Self, Self::Error> {
        let ListingRecord {
            id,
            name,
            location,
            property_type,
            price_per_night,
            bedrooms,
            bathrooms,
            guests,
            amenities,
            images,
            description,
            house_rules,
            host,
            rating,
            reviews_count,
        } = record;
        let r = id.as_str();

        Ok(Self {
            id: field(r, "id", listing::Id::new(r))?,
            name: field(r, "name", listing::Name::new(name))?,
            location: field(r, "location", listing::Location::new(location))?,
            description: field(
                r,
                "description",
                listing::Description::new(description),
            )?,
            property_type: field(
                r,
                "propertyType",
                property_type.parse().ok(),
            )?,
            price_per_night,
            bedrooms,
            bathrooms,
            guest_capacity: guests,
            amenities: fields(
                r,
                "amenities",
                amenities,
                listing::Amenity::new,
            )?,
            images: field(
                r,
                "images",
                listing::Images::new(fields(
                    r,
                    "images",
                    images,
                    listing::Image::new,
                )?),
            )?,
            house_rules: fields(
                r,
                "houseRules",
                house_rules,
                listing::HouseRule::new,
            )?,
            host: listing::Host {
                name: field(r, "host.name", listing::Name::new(host.name))?,
                avatar: field(
                    r,
                    "host.avatar",
                    listing::Image::new(host.avatar),
                )?,
            },
            rating: field(r, "rating", listing::Rating::new(rating))?,
            reviews_count,
        })
    }
}

impl TryFrom<FaqRecord> for Faq {
    type Error = Error;

    fn try_from(record: FaqRecord) -> Result<Self, Self::Error> {
        let FaqRecord {
            id,
            question,
            answer,
        } = record;
        let r = id.as_str();

        Ok(Self {
            id: field(r, "id", faq::Id::new(r))?,
            question: field(r, "question", faq::Question::new(question))?,
            answer: field(r, "answer", faq::Answer::new(answer))?,
        })
    }
}
