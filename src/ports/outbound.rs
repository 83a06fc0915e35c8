//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Todo, TodoId};
use chrono::{DateTime, Utc};

/// Repository port. Loads and stores todos through their flat state.
#[async_trait::async_trait]
pub trait TodoRepository: Send + Sync {
    /// Fetch a todo by id. Returns `None` when it was never saved.
    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, DomainError>;

    /// Insert or replace the todo with the same id.
    async fn save(&self, todo: &Todo) -> Result<(), DomainError>;
}

/// Source of "now" for the not-in-the-past checks on deadlines and reminders.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
