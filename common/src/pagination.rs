//! Abstractions for pagination.
//!
//! Pages here are prefixes of a result list growing by a fixed number of
//! nodes each time more of them are requested ("load more" style), rather
//! than windows positioned by a cursor.

use std::num::NonZeroUsize;

/// A page of nodes: a prefix of the full result list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<N> {
    /// Nodes on this [`Page`].
    pub nodes: Vec<N>,

    /// Total number of nodes in the full result list.
    pub total: usize,

    /// Indicator whether more nodes are available past this [`Page`].
    pub has_more: bool,
}

impl<N> Page<N> {
    /// Cuts a new [`Page`] out of the full result list according to the
    /// provided [`Arguments`].
    #[must_use]
    pub fn new(args: &Arguments, all: impl IntoIterator<Item = N>) -> Self {
        let mut nodes = all.into_iter().collect::<Vec<_>>();
        let total = nodes.len();
        nodes.truncate(args.limit());
        Self {
            has_more: has_more(total, args.limit()),
            nodes,
            total,
        }
    }
}

/// Indicates whether a result list of `total` nodes has more of them than
/// `shown`, while the page showing them is not empty.
#[must_use]
pub fn has_more(total: usize, shown: usize) -> bool {
    total > shown && total.min(shown) > 0
}

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Arguments {
    /// Number of nodes a [`Page`] grows by.
    page_size: NonZeroUsize,

    /// Number of nodes requested so far.
    count: usize,
}

impl Arguments {
    /// Default number of nodes a [`Page`] grows by.
    pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
        Some(size) => size,
        None => unreachable!(),
    };

    /// Creates new [`Arguments`] requesting the first page.
    #[must_use]
    pub const fn first(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            count: page_size.get(),
        }
    }

    /// Creates new [`Arguments`] requesting exactly `count` nodes.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize, count: usize) -> Self {
        Self { page_size, count }
    }

    /// Returns [`Arguments`] requesting one more page than these.
    #[must_use]
    pub const fn more(self) -> Self {
        Self {
            page_size: self.page_size,
            count: self.count.saturating_add(self.page_size.get()),
        }
    }

    /// Returns number of nodes a [`Page`] grows by.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Returns limit requested by these [`Arguments`].
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.count
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::first(Self::DEFAULT_PAGE_SIZE)
    }
}

/// Pagination selector.
#[derive(Clone, Debug)]
pub struct Selector<F> {
    /// Pagination [`Arguments`].
    pub arguments: Arguments,

    /// Additional filter being applied to the result.
    pub filter: F,
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty, $filter:ty) => {
        #[doc = "A [`Page`] of [`$node`]s."]
        pub type Page = $crate::pagination::Page<$node>;

        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments;

        #[doc = "[`Page`] selector."]
        pub type Selector = $crate::pagination::Selector<$filter>;
    };
}
