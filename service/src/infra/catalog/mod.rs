//! [`Catalog`]-related implementations.

mod record;

use std::{convert::Infallible, fs, io, path::Path, sync::Arc};

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use itertools::Itertools as _;

use crate::domain::{listing, Faq, Listing};

/// Catalog operation.
pub use common::Handler as Catalog;

/// Source of the sample [`InMemory`] catalog.
const SAMPLE: &str = include_str!("../../../data/catalog.json");

/// Read-only catalog of [`Listing`]s and [`Faq`]s held in memory.
///
/// Populated once and never mutated afterwards, so cloning it is cheap and
/// clones may be shared freely.
#[derive(Clone, Debug)]
pub struct InMemory {
    /// [`Listing`]s in their declaration order.
    listings: Arc<[Listing]>,

    /// [`Faq`]s in their declaration order.
    faqs: Arc<[Faq]>,
}

impl InMemory {
    /// Creates a new [`InMemory`] catalog out of the provided values.
    ///
    /// # Errors
    ///
    /// Errors if the provided [`Listing`]s contain duplicate IDs.
    pub fn new(
        listings: impl IntoIterator<Item = Listing>,
        faqs: impl IntoIterator<Item = Faq>,
    ) -> Result<Self, Error> {
        let listings = listings.into_iter().collect::<Arc<[_]>>();
        if let Some(id) = listings.iter().map(|l| &l.id).duplicates().next() {
            return Err(Error::DuplicateId(id.clone()));
        }

        Ok(Self {
            listings,
            faqs: faqs.into_iter().collect(),
        })
    }

    /// Returns the built-in sample [`InMemory`] catalog.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn sample() -> Self {
        Self::from_json(SAMPLE).expect("valid sample catalog")
    }

    /// Parses an [`InMemory`] catalog from the provided JSON `source`.
    ///
    /// # Errors
    ///
    /// Errors if the `source` is malformed or violates any [`Listing`]
    /// invariant.
    pub fn from_json(source: &str) -> Result<Self, Error> {
        let record::Document { listings, faqs } =
            serde_json::from_str(source)?;

        Self::new(
            listings
                .into_iter()
                .map(Listing::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            faqs.into_iter()
                .map(Faq::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )
    }

    /// Loads an [`InMemory`] catalog from the JSON file at the provided
    /// `path`.
    ///
    /// # Errors
    ///
    /// Errors if the file cannot be read, or its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let catalog = Self::from_json(&source)?;

        tracing::debug!(
            path = %path.display(),
            listings = catalog.listings.len(),
            faqs = catalog.faqs.len(),
            "catalog loaded",
        );

        Ok(catalog)
    }

    /// Returns all the [`Listing`]s in their declaration order.
    #[must_use]
    pub fn all(&self) -> Arc<[Listing]> {
        Arc::clone(&self.listings)
    }

    /// Returns the [`Listing`] with the provided [`listing::Id`], if any.
    #[must_use]
    pub fn by_id(&self, id: &listing::Id) -> Option<&Listing> {
        self.listings.iter().find(|l| &l.id == id)
    }

    /// Returns all the [`Faq`]s in their declaration order.
    #[must_use]
    pub fn faqs(&self) -> Arc<[Faq]> {
        Arc::clone(&self.faqs)
    }
}

impl Catalog<Select<By<Arc<[Listing]>, ()>>> for InMemory {
    type Ok = Arc<[Listing]>;
    type Err = Infallible;

    fn execute(
        &self,
        _: Select<By<Arc<[Listing]>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.all())
    }
}

impl Catalog<Select<By<Option<Listing>, listing::Id>>> for InMemory {
    type Ok = Option<Listing>;
    type Err = Infallible;

    fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.by_id(&by.into_inner()).cloned())
    }
}

impl Catalog<Select<By<Arc<[Faq]>, ()>>> for InMemory {
    type Ok = Arc<[Faq]>;
    type Err = Infallible;

    fn execute(
        &self,
        _: Select<By<Arc<[Faq]>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.faqs())
    }
}

/// Error of building a [`Catalog`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read a [`Catalog`] source.
    #[display("failed to read catalog source: {_0}")]
    Io(io::Error),

    /// [`Catalog`] source is not a valid JSON document.
    #[display("malformed catalog source: {_0}")]
    Json(serde_json::Error),

    /// Record has an invalid field.
    #[display("record `{record}` has invalid `{field}` field")]
    #[from(ignore)]
    InvalidField {
        /// ID of the invalid record.
        record: String,

        /// Name of the invalid field.
        field: &'static str,
    },

    /// Several [`Listing`]s share the same [`listing::Id`].
    #[display("duplicate listing ID `{_0}`")]
    #[from(ignore)]
    DuplicateId(#[error(not(source))] listing::Id),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::domain::{listing, Listing};

    use super::{Catalog as _, Error, InMemory};

    #[test]
    fn sample_is_in_declaration_order() {
        let catalog = InMemory::sample();

        let ids = catalog
            .all()
            .iter()
            .map(|l| l.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(catalog.faqs().len(), 5);
    }

    #[test]
    fn sample_keeps_primary_image_first() {
        let catalog = InMemory::sample();
        let villa = catalog.by_id(&listing::Id::new("1").unwrap()).unwrap();

        assert_eq!(
            villa.images.primary().to_string(),
            "https://i.ibb.co/DDCfTwHC/image.png",
        );
        assert_eq!(villa.images.len(), 4);
        assert_eq!(villa.guest_capacity, 8);
        assert_eq!(villa.host.name.to_string(), "Aisha Bello");
    }

    #[test]
    fn selects_by_id() {
        let catalog = InMemory::sample();

        let found: Option<Listing> = catalog
            .execute(Select(By::new(listing::Id::new("3").unwrap())))
            .unwrap();
        assert_eq!(
            found.unwrap().name.to_string(),
            "Cozy Family House with Garden",
        );

        let missing: Option<Listing> = catalog
            .execute(Select(By::new(listing::Id::new("42").unwrap())))
            .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let sample = InMemory::sample();
        let villa = sample.all()[0].clone();

        let err = InMemory::new([villa.clone(), villa], []).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id.to_string() == "1"));
    }

    #[test]
    fn rejects_invalid_records() {
        let err = InMemory::from_json(
            r#"{"listings": [{
                "id": "9",
                "name": "Nowhere",
                "location": "Abuja",
                "propertyType": "Castle",
                "pricePerNight": 1,
                "bedrooms": 1,
                "bathrooms": 1,
                "guests": 1,
                "images": ["a.png"],
                "description": "Nothing here.",
                "host": {"name": "Nobody", "avatar": "b.png"},
                "rating": 3.0
            }]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField { record, field: "propertyType" }
                if record == "9",
        ));

        let err = InMemory::from_json(r#"{"listings": [{"id": "9"}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = InMemory::from_json(
            r#"{"listings": [{
                "id": "9",
                "name": "Nowhere",
                "location": "Abuja",
                "propertyType": "House",
                "pricePerNight": 1,
                "bedrooms": 1,
                "bathrooms": 1,
                "guests": 1,
                "images": [],
                "description": "Nothing here.",
                "host": {"name": "Nobody", "avatar": "b.png"},
                "rating": 3.0
            }]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField { field: "images", .. },
        ));
    }
}
