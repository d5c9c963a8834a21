//! Remote API port
//!
//! Defines the interface to the todo-lists backend.

use async_trait::async_trait;
use thiserror::Error;

use super::super::models::{
    Empty, GetTasksResponse, Item, MeData, ResponseEnvelope, Task, Todolist, UpdateTaskModel,
};

/// Failure to complete a remote call at the transport level
///
/// An application-level rejection (non-zero result code) is not a transport
/// error; it arrives as a successfully decoded [`ResponseEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("{0}")]
    Connection(String),

    /// The server answered with a non-success HTTP status
    #[error("Request failed with status code {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The response decoded but lacked a required payload
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Client for the todo-lists backend
///
/// Implementations perform the network calls; coordinators never see HTTP.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Identity check; `result_code == 0` means the session is authenticated
    async fn me(&self) -> Result<ResponseEnvelope<MeData>, TransportError>;

    /// All lists of the current user
    async fn get_todolists(&self) -> Result<Vec<Todolist>, TransportError>;

    /// Create a list
    async fn create_todolist(
        &self,
        title: &str,
    ) -> Result<ResponseEnvelope<Item<Todolist>>, TransportError>;

    /// Delete a list
    async fn delete_todolist(&self, id: &str) -> Result<ResponseEnvelope<Empty>, TransportError>;

    /// Rename a list
    async fn update_todolist(
        &self,
        id: &str,
        title: &str,
    ) -> Result<ResponseEnvelope<Empty>, TransportError>;

    /// Tasks of one list
    async fn get_tasks(&self, list_id: &str) -> Result<GetTasksResponse, TransportError>;

    /// Create a task in a list
    async fn create_task(
        &self,
        list_id: &str,
        title: &str,
    ) -> Result<ResponseEnvelope<Item<Task>>, TransportError>;

    /// Replace a task's editable fields
    async fn update_task(
        &self,
        list_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> Result<ResponseEnvelope<Item<Task>>, TransportError>;

    /// Delete a task
    async fn delete_task(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Result<ResponseEnvelope<Empty>, TransportError>;
}
