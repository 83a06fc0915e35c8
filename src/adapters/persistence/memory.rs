//! In-memory TodoRepository. Nothing survives the process; used by tests and
//! when no state file is wanted.

use crate::domain::{DomainError, Todo, TodoId, TodoState};
use crate::ports::TodoRepository;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: tokio::sync::RwLock<HashMap<String, TodoState>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        let todos = self.todos.read().await;
        todos.get(id.as_str()).map(Todo::from_state).transpose()
    }

    async fn save(&self, todo: &Todo) -> Result<(), DomainError> {
        self.todos
            .write()
            .await
            .insert(todo.id().to_string(), todo.to_state());
        Ok(())
    }
}
