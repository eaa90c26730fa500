//! Submitted credential pair and the presence rule applied to it.

use std::fmt;
use thiserror::Error;

/// Error raised when either submitted field is empty after trimming.
///
/// The only domain error in the service. It is not an exceptional
/// condition: an empty field is an expected branch of the one decision the
/// gate makes, and it is handled entirely at the point of detection.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("username and password are required")]
pub struct MissingCredential;

/// A credential pair that passed the presence gate.
///
/// [`Credentials::parse`] is the only constructor, so holding a value proves
/// both fields were non-empty after trimming. The pair is read once per
/// submission and dropped immediately after the decision; nothing is
/// persisted, compared against stored users, or forwarded anywhere.
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Trims both fields and checks that neither is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MissingCredential`] if either trimmed value is empty.
    /// Whitespace-only input counts as empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use login_gate::domain::Credentials;
    ///
    /// let creds = Credentials::parse("bob ", " pw").unwrap();
    /// assert_eq!(creds.username(), "bob");
    ///
    /// assert!(Credentials::parse("   ", "secret").is_err());
    /// ```
    pub fn parse(username: &str, password: &str) -> Result<Self, MissingCredential> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(MissingCredential);
        }

        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// The submitted username, trimmed.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The submitted password, trimmed.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
