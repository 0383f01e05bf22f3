//! Terminal API: handlers of the [`Command`]s typed in by the user.

pub mod command;
pub mod query;

use crate::{args::Command, Context, Error};

/// Executes the provided [`Command`], returning its rendered output.
///
/// # Errors
///
/// Errors if the [`Command`] fails. The [`Error`] is meant to be shown to the
/// user as a notification.
pub fn execute(ctx: &Context, cmd: Command) -> Result<String, Error> {
    match cmd {
        Command::Search(search) => Ok(query::search(ctx, search)),
        Command::Show { id } => query::show(ctx, &id),
        Command::Quote(stay) => query::quote(ctx, stay),
        Command::Faq => Ok(query::faq(ctx)),
        Command::Book(book) => command::book(ctx, book),
        Command::SignIn(form) => command::sign_in(ctx, form),
        Command::SignUp(form) => command::sign_up(ctx, form),
    }
}
