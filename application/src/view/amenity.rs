//! Amenity [`Icon`]s.

use derive_more::Display;
use service::domain::listing::Amenity;

/// Icon of a [`Amenity`], named after the [Lucide] icon set.
///
/// [Lucide]: https://lucide.dev
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Icon {
    /// Wireless internet.
    #[display("wifi")]
    Wifi,

    /// Water of a pool.
    #[display("droplets")]
    Droplets,

    /// Air conditioning.
    #[display("snowflake")]
    Snowflake,

    /// Kitchen.
    #[display("utensils")]
    Utensils,

    /// Parking lot.
    #[display("circle-parking")]
    Parking,

    /// Gym.
    #[display("dumbbell")]
    Dumbbell,

    /// Television.
    #[display("tv")]
    Tv,

    /// Washing machine.
    #[display("washing-machine")]
    WashingMachine,

    /// Coffee maker.
    #[display("coffee")]
    Coffee,

    /// Heating.
    #[display("heater")]
    Heater,

    /// Any other amenity.
    #[default]
    #[display("circle-check")]
    Check,
}

impl Icon {
    /// Looks up the [`Icon`] of the provided [`Amenity`] label, ignoring its
    /// case.
    ///
    /// Labels without a dedicated [`Icon`] fall back to [`Icon::Check`].
    #[must_use]
    pub fn of(amenity: &Amenity) -> Self {
        let label: &str = amenity.as_ref();
        match label.to_lowercase().as_str() {
            "wifi" => Self::Wifi,
            "pool" => Self::Droplets,
            "air conditioning" | "ac" => Self::Snowflake,
            "kitchen" => Self::Utensils,
            "parking" => Self::Parking,
            "gym" => Self::Dumbbell,
            "tv" | "cable tv" => Self::Tv,
            "washing machine" => Self::WashingMachine,
            "coffee maker" => Self::Coffee,
            "heating" => Self::Heater,
            _ => Self::default(),
        }
    }
}
