//! Implements TodoRepository using a JSON file.
//!
//! All todos live in one document keyed by id; every save rewrites it atomically.

use crate::domain::{DomainError, Todo, TodoId, TodoState};
use crate::ports::TodoRepository;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// On-disk document: todo id -> flat state.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateData {
    todos: BTreeMap<String, TodoState>,
}

/// JSON file-based todo storage.
pub struct JsonTodoRepository {
    path: PathBuf,
    cache: tokio::sync::RwLock<StateData>,
}

impl JsonTodoRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: tokio::sync::RwLock::new(StateData::default()),
        }
    }

    /// Load state from disk. A missing file starts empty. A document that is
    /// not valid JSON is moved aside to `<name>.json.corrupt` and the store
    /// starts empty; any other read error is returned.
    pub async fn load(&self) -> Result<(), DomainError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(data) => data,
                Err(e) => {
                    let aside = self.corrupt_path();
                    fs::rename(&self.path, &aside).await.map_err(|re| {
                        DomainError::Repo(format!("move corrupt state file aside: {}", re))
                    })?;
                    warn!(
                        path = %self.path.display(),
                        moved_to = %aside.display(),
                        error = %e,
                        "state file is not valid JSON, moved aside and starting empty"
                    );
                    StateData::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => StateData::default(),
            Err(e) => {
                return Err(DomainError::Repo(format!(
                    "read state file {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        debug!(path = %self.path.display(), todos = data.todos.len(), "state loaded");
        *self.cache.write().await = data;
        Ok(())
    }

    /// Where an unparseable state file is kept for manual recovery.
    pub fn corrupt_path(&self) -> PathBuf {
        self.path.with_extension("json.corrupt")
    }

    /// Atomic save using write-replace:
    /// 1. Write to temp file
    /// 2. sync_all() to flush to disk
    /// 3. Rename over the target path
    async fn save_to_disk(&self, data: &StateData) -> Result<(), DomainError> {
        let json =
            serde_json::to_string_pretty(data).map_err(|e| DomainError::Repo(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Repo(format!("create state dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Repo(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Repo(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Repo(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Repo(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl TodoRepository for JsonTodoRepository {
    async fn get(&self, id: &TodoId) -> Result<Option<Todo>, DomainError> {
        let cache = self.cache.read().await;
        cache
            .todos
            .get(id.as_str())
            .map(Todo::from_state)
            .transpose()
    }

    async fn save(&self, todo: &Todo) -> Result<(), DomainError> {
        // Hold the write lock across the disk write so saves are serialized.
        let mut cache = self.cache.write().await;
        let previous = cache.todos.insert(todo.id().to_string(), todo.to_state());
        if let Err(e) = self.save_to_disk(&cache).await {
            // Keep memory consistent with what is on disk.
            match previous {
                Some(state) => cache.todos.insert(todo.id().to_string(), state),
                None => cache.todos.remove(todo.id().as_str()),
            };
            return Err(e);
        }
        Ok(())
    }
}
