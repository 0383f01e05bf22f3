//! [`Command`] for submitting a sign-up form.

use derive_more::{Display, Error};
use secrecy::{ExposeSecret as _, SecretString};
use tracerr::Traced;

use crate::{
    domain::account::{Email, FullName, Password, Welcome},
    Service,
};

use super::Command;

/// [`Command`] for submitting a sign-up form.
///
/// Only the form is validated: nothing is registered.
#[derive(Debug)]
pub struct SignUp {
    /// Full name as typed in.
    pub full_name: String,

    /// Email address as typed in.
    pub email: String,

    /// Password as typed in.
    pub password: SecretString,

    /// Repeated password as typed in.
    pub confirmation: SecretString,
}

impl<C> Command<SignUp> for Service<C> {
    type Ok = Welcome;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: SignUp) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SignUp {
            full_name,
            email,
            password,
            confirmation,
        } = cmd;

        let full_name = FullName::new(full_name)
            .ok_or_else(|| tracerr::new!(E::InvalidFullName))?;
        let email =
            Email::new(email).ok_or_else(|| tracerr::new!(E::InvalidEmail))?;
        if Password::new(password.expose_secret()).is_none() {
            return Err(tracerr::new!(E::InvalidPassword));
        }
        if password.expose_secret() != confirmation.expose_secret() {
            return Err(tracerr::new!(E::PasswordsMismatch));
        }

        tracing::info!(%email, %full_name, "signed up");

        Ok(Welcome {
            email,
            full_name: Some(full_name),
        })
    }
}

/// Error of [`SignUp`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Provided name is not a valid [`FullName`].
    #[display("Full name must be at least 3 characters.")]
    InvalidFullName,

    /// Provided email is not a valid [`Email`].
    #[display("Invalid email address.")]
    InvalidEmail,

    /// Provided password is not a valid [`Password`].
    #[display("Password must be at least 6 characters.")]
    InvalidPassword,

    /// Repeated password differs from the first one.
    #[display("Passwords don't match.")]
    PasswordsMismatch,
}

#[cfg(test)]
mod spec {
    use secrecy::SecretString;

    use crate::{infra::InMemory, Command as _, Config, Service};

    use super::{ExecutionError, SignUp};

    fn sign_up(
        full_name: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<String, ExecutionError> {
        Service::new(Config::default(), InMemory::sample())
            .execute(SignUp {
                full_name: full_name.into(),
                email: email.into(),
                password: SecretString::from(password.to_owned()),
                confirmation: SecretString::from(confirmation.to_owned()),
            })
            .map(|w| w.to_string())
            .map_err(tracerr::Traced::into_inner)
    }

    #[test]
    fn welcomes_by_name() {
        assert_eq!(
            sign_up("Ada Obi", "ada@example.com", "secret", "secret").unwrap(),
            "Welcome, Ada Obi!",
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let err = sign_up("Ada Obi", "ada@example.com", "secret", "secrets")
            .unwrap_err();

        assert!(matches!(err, ExecutionError::PasswordsMismatch));
        assert_eq!(err.to_string(), "Passwords don't match.");
    }

    #[test]
    fn rejects_short_password() {
        let err = sign_up("Ada Obi", "ada@example.com", "12345", "12345")
            .unwrap_err();

        assert!(matches!(err, ExecutionError::InvalidPassword));
    }

    #[test]
    fn accepts_long_password() {
        let password = "x".repeat(200);

        assert_eq!(
            sign_up("Ada Obi", "ada@example.com", &password, &password)
                .unwrap(),
            "Welcome, Ada Obi!",
        );
    }

    #[test]
    fn counts_full_name_as_typed() {
        let err = sign_up("Jo", "jo@example.com", "secret", "secret")
            .unwrap_err();
        assert!(matches!(err, ExecutionError::InvalidFullName));

        assert!(sign_up(" Jo", "jo@example.com", "secret", "secret").is_ok());
    }

    #[test]
    fn reports_first_invalid_field() {
        let err = sign_up("Jo", "jo", "1", "2").unwrap_err();
        assert!(matches!(err, ExecutionError::InvalidFullName));

        let err = sign_up("Joe", "jo", "1", "2").unwrap_err();
        assert!(matches!(err, ExecutionError::InvalidEmail));
    }
}
