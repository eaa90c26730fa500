//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Alert shown when a submission is rejected by the presence gate.
pub const MISSING_FIELDS_ALERT: &str = "Please enter username and password";

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Username and password form
/// - Optional alert banner for rejected submissions
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    /// Alert message rendered above the form, if any.
    pub alert: Option<&'a str>,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login` (also served at the site root)
///
/// Always renders the clean form; the alert slot is only filled when the
/// submission handler re-renders the page after a rejected POST.
///
/// # Template
///
/// Uses `templates/login.html` for server-side rendering.
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate { alert: None }
}
