//! Login form submission handler.

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use metrics::counter;
use serde_json::json;
use tracing::debug;

use super::login::{LoginTemplate, MISSING_FIELDS_ALERT};
use crate::domain::{Credentials, MissingCredential};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::LoginForm;

/// Applies the presence gate to a login submission.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Flow
///
/// 1. Deserialize the urlencoded form body
/// 2. Trim both fields and check that neither is empty
/// 3. On acceptance, redirect to the configured destination (`303 See Other`)
/// 4. On rejection, re-render the form with the alert (`422 Unprocessable Entity`)
///
/// The submitted values are dropped as soon as the decision is made; they
/// are never logged, stored, or forwarded. Each submission is decided
/// independently, so identical input always produces an identical response.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the body is not a well-formed login
/// form (wrong content type or missing fields). A present-but-empty field is
/// not an error at this level; it takes the alert branch.
pub async fn submit_handler(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form.map_err(|e| {
        AppError::bad_request("Malformed login form", json!({ "reason": e.to_string() }))
    })?;

    match Credentials::parse(&form.username, &form.password) {
        Ok(_) => {
            counter!("login_submissions_total", "outcome" => "accepted").increment(1);

            Ok(Redirect::to(&state.destination).into_response())
        }
        Err(MissingCredential) => {
            counter!("login_submissions_total", "outcome" => "rejected").increment(1);
            debug!("login submission rejected: empty field after trimming");

            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                LoginTemplate {
                    alert: Some(MISSING_FIELDS_ALERT),
                },
            )
                .into_response())
        }
    }
}
