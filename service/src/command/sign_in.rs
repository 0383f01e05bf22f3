//! [`Command`] for submitting a sign-in form.

use derive_more::{Display, Error};
use secrecy::{ExposeSecret as _, SecretString};
use tracerr::Traced;

use crate::{
    domain::account::{Email, Password, Welcome},
    Service,
};

use super::Command;

/// [`Command`] for submitting a sign-in form.
///
/// Only the form is validated: no account is looked up and no session is
/// created.
#[derive(Debug)]
pub struct SignIn {
    /// Email address as typed in.
    pub email: String,

    /// Password as typed in.
    pub password: SecretString,
}

impl<C> Command<SignIn> for Service<C> {
    type Ok = Welcome;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: SignIn) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SignIn { email, password } = cmd;

        let email =
            Email::new(email).ok_or_else(|| tracerr::new!(E::InvalidEmail))?;
        if Password::new(password.expose_secret()).is_none() {
            return Err(tracerr::new!(E::InvalidPassword));
        }

        tracing::info!(%email, "signed in");

        Ok(Welcome {
            email,
            full_name: None,
        })
    }
}

/// Error of [`SignIn`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Provided email is not a valid [`Email`].
    #[display("Invalid email address.")]
    InvalidEmail,

    /// Provided password is not a valid [`Password`].
    #[display("Password must be at least 6 characters.")]
    InvalidPassword,
}
