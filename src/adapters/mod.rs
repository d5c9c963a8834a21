//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - reqwest client for the todo-lists REST API

pub mod http;

pub use http::HttpApi;
