//! Domain layer containing the login gate rule.
//!
//! The one business rule of this service lives here: a submission is
//! accepted when both fields are non-empty after trimming. The layer has no
//! dependencies on the HTTP or presentation layers.
//!
//! # Submission Flow
//!
//! 1. HTTP handler receives the posted form
//! 2. [`credentials::Credentials::parse`] trims both fields and applies the rule
//! 3. The pair is dropped as soon as the decision is made

pub mod credentials;

pub use credentials::{Credentials, MissingCredential};
