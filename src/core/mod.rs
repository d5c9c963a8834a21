//! Core domain logic for todosync
//!
//! Everything here is independent of the transport. Remote calls go through
//! the port traits; state changes go through the stores.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Todolist, Task, RequestStatus, envelopes)
//! - `store/` - Pure reducers and the combined [`store::Store`]
//! - `services/` - Coordinators and error forwarding
//! - `ports/` - Trait definitions for the remote API

pub mod models;
pub mod ports;
pub mod services;
pub mod store;
