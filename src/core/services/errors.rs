//! Error forwarding
//!
//! Both failure kinds, a rejected envelope and a transport error, end up in
//! the same place: the global error message and a `failed` status. The
//! normalized error is also handed back so the caller can return it.

use log::warn;
use thiserror::Error;

use crate::core::models::{RequestStatus, ResponseEnvelope};
use crate::core::ports::TransportError;
use crate::core::store::{AppCommand, Store};

/// Message used when the failure carries no text of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "Some error occurred";

/// Outcome of a coordinator that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The server rejected the request (non-zero result code)
    #[error("{message}")]
    Server {
        /// Result code from the envelope
        result_code: i32,
        /// First message of the envelope, or the fallback
        message: String,
    },

    /// The call did not complete
    #[error("{0}")]
    Network(String),

    /// The list is not in the local store
    #[error("list {list_id} not found")]
    ListNotFound {
        /// List id
        list_id: String,
    },

    /// The task to update is not in the local store
    #[error("task {task_id} not found in list {list_id}")]
    TaskNotFound {
        /// Task id
        task_id: String,
        /// List id
        list_id: String,
    },
}

impl SyncError {
    /// Message surfaced to the user
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Forward a rejected envelope to the application-status store
pub fn handle_server_app_error<T>(envelope: &ResponseEnvelope<T>, store: &mut Store) -> SyncError {
    let message = envelope
        .messages
        .first()
        .cloned()
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
    warn!("Server rejected request (code {}): {message}", envelope.result_code);

    store.dispatch(AppCommand::SetError(Some(message.clone())));
    store.dispatch(AppCommand::SetStatus(RequestStatus::Failed));

    SyncError::Server {
        result_code: envelope.result_code,
        message,
    }
}

/// Forward a transport failure to the application-status store
pub fn handle_server_network_error(error: &TransportError, store: &mut Store) -> SyncError {
    let mut message = error.to_string();
    if message.trim().is_empty() {
        message = FALLBACK_ERROR_MESSAGE.to_string();
    }
    warn!("Request failed: {message}");

    store.dispatch(AppCommand::SetError(Some(message.clone())));
    store.dispatch(AppCommand::SetStatus(RequestStatus::Failed));

    SyncError::Network(message)
}
