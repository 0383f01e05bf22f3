//! [`Query`] collection related to the multiple [`Listing`]s.
//!
//! Every [`Query`] here re-filters the whole catalog from scratch through
//! the single [`matches()`] predicate, so the same [`Criteria`] always
//! yields the same [`Listing`]s in the same (catalog) order.

use std::{convert::Infallible, sync::Arc};

use common::{
    operations::{By, Select},
    pagination,
};

use crate::{
    domain::Listing,
    infra::Catalog,
    read::listing::list::{Arguments, Criteria, Page, Selector},
    Service,
};

use super::Query;

/// Indicates whether the provided [`Listing`] satisfies all the filters of
/// the provided [`Criteria`].
///
/// A filter set to its "no filter" value is satisfied by any [`Listing`].
#[must_use]
pub fn matches(listing: &Listing, criteria: &Criteria) -> bool {
    let Criteria {
        location,
        property_type,
        price_range,
        amenities,
        guests,
        bedrooms,
    } = criteria;

    (location.is_empty() || {
        let haystack: &str = listing.location.as_ref();
        haystack.to_lowercase().contains(&location.to_lowercase())
    }) && property_type.accepts(listing.property_type)
        && price_range.contains(listing.price_per_night)
        && amenities.iter().all(|a| listing.offers(a))
        && (*guests <= 0 || i32::from(listing.guest_capacity) >= *guests)
        && bedrooms.accepts(listing.bedrooms)
}

/// Filters the provided `catalog` by the provided [`Criteria`], preserving
/// the `catalog` order.
#[must_use]
pub fn search<'c>(
    catalog: &'c [Listing],
    criteria: &Criteria,
) -> Vec<&'c Listing> {
    catalog.iter().filter(|l| matches(l, criteria)).collect()
}

/// Returns the prefix of the provided `results` requested by the provided
/// [`Arguments`].
#[must_use]
pub fn page<T>(results: Vec<T>, args: &Arguments) -> Vec<T> {
    pagination::Page::new(args, results).nodes
}

/// Indicates whether searching the `catalog` by the provided [`Criteria`]
/// yields more [`Listing`]s than the `shown` ones, given that some are shown
/// at all.
#[must_use]
pub fn has_more(
    catalog: &[Listing],
    criteria: &Criteria,
    shown: usize,
) -> bool {
    let total = catalog.iter().filter(|l| matches(l, criteria)).count();
    pagination::has_more(total, shown)
}

/// Shortcut for a [`Catalog`] able to return all its [`Listing`]s.
pub trait ListingCatalog:
    Catalog<
    Select<By<Arc<[Listing]>, ()>>,
    Ok = Arc<[Listing]>,
    Err = Infallible,
>
{
}
impl<C> ListingCatalog for C where
    C: Catalog<
        Select<By<Arc<[Listing]>, ()>>,
        Ok = Arc<[Listing]>,
        Err = Infallible,
    >
{
}

/// Queries all the [`Listing`]s matching the provided [`Criteria`].
#[derive(Clone, Debug)]
pub struct Search(pub Criteria);

impl<C: ListingCatalog> Query<Search> for Service<C> {
    type Ok = Vec<Listing>;
    type Err = Infallible;

    fn execute(&self, Search(criteria): Search) -> Result<Self::Ok, Self::Err> {
        let all = self.catalog().execute(Select(By::new(())))?;
        let found = search(&all, &criteria)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();

        tracing::debug!(?criteria, found = found.len(), "listings searched");

        Ok(found)
    }
}

/// Queries a [`Page`] of the [`Listing`]s matching the [`Criteria`] of the
/// provided [`Selector`].
#[derive(Clone, Debug)]
pub struct List(pub Selector);

impl<C: ListingCatalog> Query<List> for Service<C> {
    type Ok = Page;
    type Err = Infallible;

    fn execute(&self, List(selector): List) -> Result<Self::Ok, Self::Err> {
        let Selector {
            arguments,
            filter: criteria,
        } = selector;

        let found = self.execute(Search(criteria))?;
        let page = Page::new(&arguments, found);

        tracing::debug!(
            shown = page.nodes.len(),
            total = page.total,
            has_more = page.has_more,
            "listings page selected",
        );

        Ok(page)
    }
}

/// Queries whether more [`Listing`]s match the provided [`Criteria`] than
/// the `shown` ones.
#[derive(Clone, Debug)]
pub struct HasMore {
    /// [`Criteria`] the shown [`Listing`]s were searched by.
    pub criteria: Criteria,

    /// Number of [`Listing`]s requested to be shown so far.
    pub shown: usize,
}

impl<C: ListingCatalog> Query<HasMore> for Service<C> {
    type Ok = bool;
    type Err = Infallible;

    fn execute(&self, query: HasMore) -> Result<Self::Ok, Self::Err> {
        let HasMore { criteria, shown } = query;
        let all = self.catalog().execute(Select(By::new(())))?;
        Ok(has_more(&all, &criteria, shown))
    }
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroUsize;

    use crate::{
        domain::listing::{self, Listing, PropertyType},
        infra::InMemory,
        read::listing::list::{
            Arguments, BedroomFilter, Criteria, PriceRange, PropertyTypeFilter,
            Selector,
        },
        Config, Query as _, Service,
    };

    use super::{has_more, matches, page, search, HasMore, List, Search};

    fn catalog() -> Vec<Listing> {
        InMemory::sample().all().to_vec()
    }

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.to_string()).collect()
    }

    fn amenities(labels: &[&str]) -> Vec<listing::Amenity> {
        labels
            .iter()
            .map(|a| listing::Amenity::new(*a).unwrap())
            .collect()
    }

    /// [`Criteria`] with every filter set to its "no filter" value.
    fn unfiltered() -> Criteria {
        Criteria {
            location: String::new(),
            property_type: PropertyTypeFilter::Any,
            price_range: PriceRange {
                min: 0,
                max: u32::MAX,
            },
            amenities: vec![],
            guests: 0,
            bedrooms: BedroomFilter::Any,
        }
    }

    #[test]
    fn unfiltered_criteria_match_everything() {
        let catalog = catalog();

        assert!(catalog.iter().all(|l| matches(l, &unfiltered())));
        assert!(catalog.iter().all(|l| matches(l, &Criteria::default())));
    }

    #[test]
    fn search_preserves_catalog_order() {
        let catalog = catalog();
        let criteria = Criteria {
            amenities: amenities(&["Parking"]),
            ..Criteria::default()
        };

        assert_eq!(ids(&search(&catalog, &criteria)), ["1", "3", "4"]);
    }

    #[test]
    fn search_is_idempotent() {
        let catalog = catalog();
        let criteria = Criteria {
            location: "abuja".into(),
            guests: 5,
            ..Criteria::default()
        };

        let first = ids(&search(&catalog, &criteria));
        let second = ids(&search(&catalog, &criteria));
        assert_eq!(first, second);
        assert_eq!(first, ["1", "3", "4"]);
    }

    #[test]
    fn location_is_case_insensitive_substring() {
        let catalog = catalog();

        for (needle, expected) in [
            ("Abuja", vec!["1", "2", "3", "4"]),
            ("ABUJA", vec!["1", "2", "3", "4"]),
            ("wuse", vec!["2"]),
            ("Maitama, Abu", vec!["4"]),
            ("Lagos", vec![]),
        ] {
            let criteria = Criteria {
                location: needle.into(),
                ..Criteria::default()
            };
            assert_eq!(
                ids(&search(&catalog, &criteria)),
                expected,
                "location: `{needle}`",
            );
        }
    }

    #[test]
    fn property_type_matches_exactly() {
        let catalog = catalog();
        let criteria = Criteria {
            property_type: PropertyTypeFilter::Only(PropertyType::Villa),
            ..Criteria::default()
        };

        assert_eq!(ids(&search(&catalog, &criteria)), ["1"]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let catalog = catalog();

        let criteria = Criteria {
            price_range: PriceRange {
                min: 90_000,
                max: 150_000,
            },
            ..Criteria::default()
        };
        assert_eq!(ids(&search(&catalog, &criteria)), ["1", "3"]);

        let criteria = Criteria {
            price_range: PriceRange {
                min: 100_000,
                max: PriceRange::DEFAULT_CEILING,
            },
            ..Criteria::default()
        };
        assert_eq!(ids(&search(&catalog, &criteria)), ["1", "4"]);
    }

    #[test]
    fn amenities_are_conjunctive() {
        let catalog = catalog();

        let criteria = Criteria {
            amenities: amenities(&["WiFi", "Pool"]),
            ..Criteria::default()
        };
        assert_eq!(ids(&search(&catalog, &criteria)), ["1", "4"]);

        let criteria = Criteria {
            amenities: amenities(&["Garden", "Gym"]),
            ..Criteria::default()
        };
        assert!(search(&catalog, &criteria).is_empty());
    }

    #[test]
    fn amenities_are_case_sensitive() {
        let catalog = catalog();
        let criteria = Criteria {
            amenities: amenities(&["wifi"]),
            ..Criteria::default()
        };

        assert!(search(&catalog, &criteria).is_empty());
    }

    #[test]
    fn guests_filter_by_minimal_capacity() {
        let catalog = catalog();

        for (guests, expected) in [
            (0, vec!["1", "2", "3", "4"]),
            (-3, vec!["1", "2", "3", "4"]),
            (4, vec!["1", "2", "3", "4"]),
            (6, vec!["1", "3", "4"]),
            (8, vec!["1"]),
            (9, vec![]),
        ] {
            let criteria = Criteria {
                guests,
                ..Criteria::default()
            };
            assert_eq!(
                ids(&search(&catalog, &criteria)),
                expected,
                "guests: {guests}",
            );
        }
    }

    #[test]
    fn bedrooms_filter() {
        let catalog = catalog();

        for (option, expected) in [
            ("Any", vec!["1", "2", "3", "4"]),
            ("Studio", vec![]),
            ("2", vec!["2"]),
            ("3", vec!["3", "4"]),
            ("4+", vec!["1"]),
            ("2.5", vec!["2"]),
            ("2 bedrooms", vec!["2"]),
            ("-1", vec![]),
            ("70000", vec![]),
            ("many", vec!["1", "2", "3", "4"]),
        ] {
            let criteria = Criteria {
                bedrooms: option.parse().unwrap(),
                ..Criteria::default()
            };
            assert_eq!(
                ids(&search(&catalog, &criteria)),
                expected,
                "bedrooms: `{option}`",
            );
        }
    }

    #[test]
    fn studio_matches_only_zero_bedrooms() {
        let mut studio = catalog()[1].clone();
        studio.bedrooms = 0;
        let criteria = Criteria {
            bedrooms: BedroomFilter::Studio,
            ..Criteria::default()
        };

        assert!(matches(&studio, &criteria));
        assert!(!matches(&catalog()[1], &criteria));
    }

    #[test]
    fn pages_are_clamped_prefixes() {
        let results = (1..=10).collect::<Vec<_>>();
        let size = NonZeroUsize::new(6).unwrap();

        assert_eq!(
            page(results.clone(), &Arguments::new(size, 6)),
            [1, 2, 3, 4, 5, 6],
        );
        assert_eq!(page(results.clone(), &Arguments::new(size, 12)), results);
        assert!(page(results, &Arguments::new(size, 0)).is_empty());

        let listings = page(catalog(), &Arguments::first(size));
        assert_eq!(listings.len(), 4);
    }

    #[test]
    fn has_more_until_everything_shown() {
        let catalog = catalog();
        let criteria = Criteria::default();

        assert!(has_more(&catalog, &criteria, 2));
        assert!(has_more(&catalog, &criteria, 3));
        assert!(!has_more(&catalog, &criteria, 4));
        assert!(!has_more(&catalog, &criteria, 6));
        assert!(!has_more(&catalog, &criteria, 0));
    }

    #[test]
    fn has_more_is_false_for_empty_results() {
        let catalog = catalog();
        let criteria = Criteria {
            location: "Lagos".into(),
            ..Criteria::default()
        };

        assert!(!has_more(&catalog, &criteria, 6));
    }

    #[test]
    fn queries_whole_abuja_sample() {
        let service = Service::new(Config::default(), InMemory::sample());
        let criteria = Criteria {
            location: "Abuja".into(),
            ..Criteria::default()
        };

        let found = service.execute(Search(criteria.clone())).unwrap();
        assert_eq!(found.len(), 4);

        let page = service
            .execute(List(Selector {
                arguments: Arguments::default(),
                filter: criteria.clone(),
            }))
            .unwrap();
        assert_eq!(page.nodes.len(), 4);
        assert_eq!(page.total, 4);
        assert!(!page.has_more);

        let more = service
            .execute(HasMore {
                criteria,
                shown: Arguments::default().limit(),
            })
            .unwrap();
        assert!(!more);
    }

    #[test]
    fn queries_grow_by_page_size() {
        let service = Service::new(
            Config {
                page_size: NonZeroUsize::new(3).unwrap(),
            },
            InMemory::sample(),
        );
        let first = Arguments::first(service.config().page_size);

        let page = service
            .execute(List(Selector {
                arguments: first,
                filter: Criteria::default(),
            }))
            .unwrap();
        assert_eq!(page.nodes.len(), 3);
        assert!(page.has_more);

        let page = service
            .execute(List(Selector {
                arguments: first.more(),
                filter: Criteria::default(),
            }))
            .unwrap();
        assert_eq!(page.nodes.len(), 4);
        assert!(!page.has_more);
    }
}
