//! [`Error`]-related definitions.

use std::fmt;

use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::{
    command::{book_listing, sign_in, sign_up},
    infra::catalog,
};
use tracerr::{Trace, Traced};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            message: $message.to_owned(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// Terminal front-end [`Error`], shown to the user as a notification.
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an internal error.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_ERROR",
            message: msg.to_string(),
            backtrace: None,
        }
    }

    /// Creates a new [`Error`] with the provided [`Code`] and a message of
    /// the provided `err`.
    fn coded(code: Code, err: &impl ToString) -> Self {
        Self {
            code,
            message: err.to_string(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for book_listing::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use book_listing::ExecutionError as E;

        Some(match self {
            E::ListingNotFound(_) => Error::coded("LISTING_NOT_EXISTS", self),
            E::InvalidDates => Error::coded("INVALID_DATES", self),
            E::InvalidGuests { .. } => Error::coded("INVALID_GUESTS", self),
        })
    }
}

impl AsError for sign_in::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use sign_in::ExecutionError as E;

        Some(match self {
            E::InvalidEmail => Error::coded("INVALID_EMAIL", self),
            E::InvalidPassword => Error::coded("INVALID_PASSWORD", self),
        })
    }
}

impl AsError for sign_up::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use sign_up::ExecutionError as E;

        Some(match self {
            E::InvalidFullName => Error::coded("INVALID_FULL_NAME", self),
            E::InvalidEmail => Error::coded("INVALID_EMAIL", self),
            E::InvalidPassword => Error::coded("INVALID_PASSWORD", self),
            E::PasswordsMismatch => Error::coded("PASSWORDS_MISMATCH", self),
        })
    }
}

impl AsError for catalog::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

#[cfg(test)]
mod spec {
    use service::{command::sign_up, infra::catalog};

    use super::AsError as _;

    #[test]
    fn maps_command_errors() {
        let err = tracerr::new!(sign_up::ExecutionError::PasswordsMismatch)
            .into_error();

        assert_eq!(err.code, "PASSWORDS_MISMATCH");
        assert_eq!(err.message, "Passwords don't match.");
        assert!(err.backtrace.is_some());
    }

    #[test]
    fn falls_back_to_internal() {
        let err = catalog::Error::DuplicateId("1".parse().unwrap()).as_error();

        assert_eq!(err.code, "INTERNAL_ERROR");
        assert!(err.backtrace.is_none());
    }
}
