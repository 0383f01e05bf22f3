//! [`Listing`] definitions.

use common::{define_kind, money::Currency, Money};
use derive_more::{AsRef, Deref, Display, Into};

use super::define_text;

/// Property available for a short-term rent.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Name`] of this [`Listing`].
    pub name: Name,

    /// [`Location`] this [`Listing`] is situated at.
    pub location: Location,

    /// [`Description`] of this [`Listing`].
    pub description: Description,

    /// [`PropertyType`] of this [`Listing`].
    pub property_type: PropertyType,

    /// Price of a single night in this [`Listing`].
    pub price_per_night: Price,

    /// Number of bedrooms in this [`Listing`].
    ///
    /// Zero means a studio.
    pub bedrooms: NumBedrooms,

    /// Number of bathrooms in this [`Listing`].
    pub bathrooms: NumBathrooms,

    /// Maximum number of guests this [`Listing`] accommodates.
    pub guest_capacity: NumGuests,

    /// [`Amenity`]s this [`Listing`] offers.
    pub amenities: Vec<Amenity>,

    /// [`Images`] of this [`Listing`].
    pub images: Images,

    /// [`HouseRule`]s of this [`Listing`].
    pub house_rules: Vec<HouseRule>,

    /// [`Host`] of this [`Listing`].
    pub host: Host,

    /// [`Rating`] of this [`Listing`].
    pub rating: Rating,

    /// Number of reviews the [`Rating`] is based on.
    pub reviews_count: ReviewsCount,
}

impl Listing {
    /// Currency all the [`Listing`] prices are expressed in.
    pub const CURRENCY: Currency = Currency::Ngn;

    /// Returns the price of a single night in this [`Listing`] as [`Money`].
    #[must_use]
    pub fn nightly_rate(&self) -> Money {
        Money::whole(self.price_per_night, Self::CURRENCY)
    }

    /// Indicates whether this [`Listing`] is a studio (has no bedrooms).
    #[must_use]
    pub fn is_studio(&self) -> bool {
        self.bedrooms == 0
    }

    /// Indicates whether this [`Listing`] offers the provided [`Amenity`].
    ///
    /// Labels are compared exactly, including their case.
    #[must_use]
    pub fn offers(&self, amenity: &Amenity) -> bool {
        self.amenities.contains(amenity)
    }
}

define_text! {
    #[doc = "ID of a [`Listing`]."]
    Id(max = 64)
}

define_text! {
    #[doc = "Display name of a [`Listing`] or its [`Host`]."]
    Name(max = 256)
}

define_text! {
    #[doc = "Human-readable location of a [`Listing`] (`District, City`)."]
    Location(max = 512)
}

define_text! {
    #[doc = "Free-text description of a [`Listing`]."]
    Description(max = 4096)
}

define_text! {
    #[doc = "Label of an amenity offered by a [`Listing`]."]
    Amenity(max = 128)
}

define_text! {
    #[doc = "Reference (URL or path) to an image."]
    Image(max = 2048)
}

define_text! {
    #[doc = "Single house rule of a [`Listing`]."]
    HouseRule(max = 512)
}

define_kind! {
    #[doc = "Type of a property behind a [`Listing`]."]
    enum PropertyType {
        #[doc = "An apartment in a building."]
        Apartment = 1,

        #[doc = "A standalone house."]
        House = 2,

        #[doc = "A villa."]
        Villa = 3,

        #[doc = "A penthouse on the top floor of a building."]
        Penthouse = 4,
    }
}

/// Whole-number price of a single night.
pub type Price = u32;

/// Number of bedrooms in a [`Listing`].
pub type NumBedrooms = u16;

/// Number of bathrooms in a [`Listing`].
pub type NumBathrooms = u16;

/// Number of guests.
pub type NumGuests = u16;

/// Number of reviews of a [`Listing`].
pub type ReviewsCount = u32;

/// Non-empty ordered collection of [`Image`]s.
///
/// The first [`Image`] is the primary one.
#[derive(AsRef, Clone, Debug, Deref, Eq, Into, PartialEq)]
#[as_ref([Image])]
pub struct Images(Vec<Image>);

impl Images {
    /// Creates new [`Images`] if the provided ones are not empty.
    #[must_use]
    pub fn new(images: impl IntoIterator<Item = Image>) -> Option<Self> {
        let images = images.into_iter().collect::<Vec<_>>();
        (!images.is_empty()).then_some(Self(images))
    }

    /// Returns the primary [`Image`].
    #[expect(clippy::missing_panics_doc, reason = "non-empty by invariant")]
    #[must_use]
    pub fn primary(&self) -> &Image {
        self.0.first().expect("non-empty `Images`")
    }
}

/// Host of a [`Listing`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Host {
    /// [`Name`] of this [`Host`].
    pub name: Name,

    /// Avatar [`Image`] of this [`Host`].
    pub avatar: Image,
}

/// Average guest rating of a [`Listing`], from `0` to `5`.
#[derive(Clone, Copy, Debug, Display, Into, PartialEq, PartialOrd)]
pub struct Rating(f32);

impl Rating {
    /// Highest possible [`Rating`].
    pub const MAX: f32 = 5.0;

    /// Creates a new [`Rating`] if the given `value` lies within `0..=5`.
    #[must_use]
    pub fn new(value: f32) -> Option<Self> {
        (0.0..=Self::MAX).contains(&value).then_some(Self(value))
    }
}
