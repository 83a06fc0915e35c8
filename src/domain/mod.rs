//! Core domain layer. No external I/O dependencies.
//!
//! The todo entity, its value objects and its flat persisted state live here.
//! Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod state;
pub mod values;

pub use entities::Todo;
pub use errors::{DomainError, ParseError};
pub use state::TodoState;
pub use values::{Owner, TodoDeadline, TodoId, TodoName, TodoReminder, TodoStatus};
