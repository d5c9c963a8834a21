//! State synchronization services
//!
//! - [`sync`] - coordinators that pair one remote call with one state change
//! - [`errors`] - normalization of failed calls into the application status

pub mod errors;
pub mod sync;

pub use errors::{
    FALLBACK_ERROR_MESSAGE, SyncError, handle_server_app_error, handle_server_network_error,
};
pub use sync::Synchronizer;
