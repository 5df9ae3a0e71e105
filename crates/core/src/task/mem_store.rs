//! In-memory task storage implementation
//!
//! Tasks live in an insertion-ordered `Vec` guarded by a single `RwLock`,
//! together with the next-id counter. Mutating operations take the write
//! lock, so id assignment is atomic and readers always see a consistent
//! snapshot.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::Task;
use super::repository::TaskRepository;
use crate::{Error, Result};

#[derive(Debug)]
struct StoreState {
    tasks: Vec<Task>,
    next_id: u64,
}

/// In-memory task store. Owns all `Task` records and the id generator.
pub struct MemTaskStore {
    state: RwLock<StoreState>,
}

impl MemTaskStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for MemTaskStore {
    async fn create(&self, title: &str, description: Option<String>) -> Result<Task> {
        // Validate before touching the counter, so a rejected create leaves
        // the store untouched.
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let mut state = self.state.write().await;
        let mut task = Task::new(state.next_id, title);
        if let Some(desc) = description {
            task = task.with_description(desc);
        }
        state.tasks.push(task.clone());
        state.next_id += 1;

        tracing::debug!(id = task.id, "task created");
        Ok(task)
    }

    async fn list(&self) -> Result<(Vec<Task>, usize)> {
        let state = self.state.read().await;
        let tasks = state.tasks.clone();
        let total = tasks.len();
        Ok((tasks, total))
    }

    async fn complete(&self, id: u64) -> Result<Task> {
        let mut state = self.state.write().await;
        match state.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                // Completing an already-completed task is idempotent and
                // simply refreshes the timestamp.
                task.complete();
                Ok(task.clone())
            }
            None => Err(Error::TaskNotFound(id)),
        }
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut state = self.state.write().await;
        // Not-found is detected by the length delta, not a pre-check. Ids are
        // unique by construction of the counter, so at most one task matches.
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() < before {
            tracing::debug!(id, "task deleted");
            Ok(())
        } else {
            Err(Error::TaskNotFound(id))
        }
    }
}
