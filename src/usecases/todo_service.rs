//! Todo use cases: load the entity, apply one transition, save it.
//!
//! - Unknown ids fail with `DomainError::NotFound`
//! - A rejected transition is never saved
//! - Deadline/reminder checks use the injected Clock

use crate::domain::{DomainError, Owner, Todo, TodoDeadline, TodoId, TodoName, TodoReminder};
use crate::ports::{Clock, TodoRepository};
use std::sync::Arc;
use tracing::{info, warn};

/// Todo service. Coordinates entity transitions and persistence.
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Create and store a new open todo with a generated id.
    pub async fn add_todo(&self, name: TodoName, owner: Owner) -> Result<Todo, DomainError> {
        let todo = Todo::add(TodoId::generate(), name, owner);
        self.repo.save(&todo).await?;
        info!(todo_id = %todo.id(), owner_id = todo.owner().id(), "todo added");
        Ok(todo)
    }

    pub async fn get(&self, id: &TodoId) -> Result<Todo, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }

    pub async fn mark_as_done(&self, id: &TodoId) -> Result<Todo, DomainError> {
        self.transition(id, "mark_as_done", |todo, _| todo.mark_as_done())
            .await
    }

    pub async fn reopen(&self, id: &TodoId) -> Result<Todo, DomainError> {
        self.transition(id, "reopen", |todo, _| todo.reopen()).await
    }

    pub async fn add_deadline(
        &self,
        id: &TodoId,
        owner: &Owner,
        deadline: TodoDeadline,
    ) -> Result<Todo, DomainError> {
        self.transition(id, "add_deadline", |todo, now| {
            todo.add_deadline_at(owner, deadline, now)
        })
        .await
    }

    pub async fn add_reminder(
        &self,
        id: &TodoId,
        owner: &Owner,
        reminder: TodoReminder,
    ) -> Result<Todo, DomainError> {
        self.transition(id, "add_reminder", |todo, now| {
            todo.add_reminder_at(owner, reminder, now)
        })
        .await
    }

    async fn transition<F>(&self, id: &TodoId, op: &str, apply: F) -> Result<Todo, DomainError>
    where
        F: FnOnce(&mut Todo, chrono::DateTime<chrono::Utc>) -> Result<(), DomainError>,
    {
        let mut todo = self.get(id).await?;
        if let Err(e) = apply(&mut todo, self.clock.now()) {
            warn!(todo_id = %id, op, error = %e, "todo transition rejected");
            return Err(e);
        }
        self.repo.save(&todo).await?;
        info!(todo_id = %id, op, status = %todo.status(), "todo updated");
        Ok(todo)
    }
}
