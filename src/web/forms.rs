//! Form payloads submitted by the browser.

use serde::Deserialize;

/// Payload of the login form.
///
/// Field names match the input names on the login page. Values arrive
/// untrimmed; [`crate::domain::Credentials::parse`] owns the trimming rule.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
