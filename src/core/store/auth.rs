//! Auth store

use serde::Serialize;

/// Session state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    /// Whether the identity check reported an authenticated session
    pub is_logged_in: bool,
}

/// Commands accepted by the auth store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthCommand {
    /// Record the outcome of the identity check
    SetIsLoggedIn(bool),
}

/// Apply one command
#[must_use]
pub const fn reduce(_state: AuthState, command: &AuthCommand) -> AuthState {
    match command {
        AuthCommand::SetIsLoggedIn(is_logged_in) => AuthState {
            is_logged_in: *is_logged_in,
        },
    }
}
