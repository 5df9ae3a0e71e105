//! Application state

use std::sync::Arc;

use tareas_core::task::MemTaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: MemTaskStore,
}

impl AppState {
    /// Create a new AppState with an empty task store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                task_store: MemTaskStore::new(),
            }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &MemTaskStore {
        &self.inner.task_store
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
