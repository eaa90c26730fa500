//! HTML page and submission handlers for the login flow.

mod home;
mod login;
mod submit;

pub use home::home_handler;
pub use login::{MISSING_FIELDS_ALERT, login_handler};
pub use submit::submit_handler;
