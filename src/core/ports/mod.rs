//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the stores/coordinators and the
//! network. Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! Coordinators depend only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Scripted fakes for unit tests
//! - **Flexibility**: Swap the transport without touching state logic
//! - **Clarity**: Clear boundaries between layers

mod todo_api;

pub use todo_api::{TodoApi, TransportError};
