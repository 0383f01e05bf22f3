//! [`Command`] definition.

pub mod book_listing;
pub mod sign_in;
pub mod sign_up;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    book_listing::BookListing, sign_in::SignIn, sign_up::SignUp,
};
