//! # Login Gate
//!
//! A minimal presence-gated login service built with Axum.
//!
//! The service renders a login form and gates navigation on a single rule:
//! both submitted fields must be non-empty after trimming. Accepted
//! submissions are redirected to a configurable destination page; rejected
//! ones get the form back with an alert. Nothing is authenticated, stored,
//! or forwarded: the gate checks presence, not identity.
//!
//! ## Architecture
//!
//! This crate follows a small layered layout:
//!
//! - **Domain Layer** ([`domain`]) - The credential presence rule
//! - **API Layer** ([`api`]) - Health endpoint, middleware, and the 404 fallback
//! - **Web Layer** ([`web`]) - HTML pages and the form submission handler
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point accepted logins somewhere other than /home
//! export DESTINATION_PATH="/home"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`], with command-line overrides for individual values.
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;
