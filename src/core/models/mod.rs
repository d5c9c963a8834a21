//! Domain models for todosync
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Todolist`] / [`TodolistDomain`] - a list and its client-side annotations
//! - [`Task`] - a unit of work inside a list
//! - [`RequestStatus`] - lifecycle of a remote call
//! - [`ResponseEnvelope`] - the API's uniform response wrapper

mod envelope;
mod status;
mod task;
mod todolist;

pub use envelope::{
    Empty, FieldError, GetTasksResponse, Item, MeData, RESULT_CODE_SUCCESS, ResponseEnvelope,
};
pub use status::{FilterValue, RequestStatus};
pub use task::{Task, TaskPriority, TaskStatus, UpdateDomainTaskModel, UpdateTaskModel};
pub use todolist::{Todolist, TodolistDomain};
