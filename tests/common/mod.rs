#![allow(dead_code)]

use login_gate::AppState;

/// Destination used by tests unless a case needs its own.
pub const TEST_DESTINATION: &str = "/home";

pub fn create_test_state() -> AppState {
    AppState::new(TEST_DESTINATION.to_string())
}

pub fn create_test_state_with_destination(destination: &str) -> AppState {
    AppState::new(destination.to_string())
}
