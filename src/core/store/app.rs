//! Application-status store
//!
//! One global request lifecycle, the latest error message and the
//! initialization flag. Every transition is a plain replacement.

use serde::Serialize;

use crate::core::models::RequestStatus;

/// Process-wide application status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    /// Whether a remote call is in flight, and how the last one ended
    pub status: RequestStatus,
    /// Latest error message, if any
    pub error: Option<String>,
    /// Set once the startup identity check has completed
    pub is_initialized: bool,
}

/// Commands accepted by the application-status store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Replace the global status
    SetStatus(RequestStatus),
    /// Replace (or clear) the error message
    SetError(Option<String>),
    /// Mark the application as initialized
    SetInitialized(bool),
}

/// Apply one command
#[must_use]
pub fn reduce(state: AppState, command: &AppCommand) -> AppState {
    match command {
        AppCommand::SetStatus(status) => AppState {
            status: *status,
            ..state
        },
        AppCommand::SetError(error) => AppState {
            error: error.clone(),
            ..state
        },
        AppCommand::SetInitialized(is_initialized) => AppState {
            is_initialized: *is_initialized,
            ..state
        },
    }
}
