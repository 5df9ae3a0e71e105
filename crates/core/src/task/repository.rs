//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task from a title and optional description
    async fn create(&self, title: &str, description: Option<String>) -> Result<Task>;

    /// Get all tasks in insertion order, plus the total count
    async fn list(&self) -> Result<(Vec<Task>, usize)>;

    /// Mark a task completed by id
    async fn complete(&self, id: u64) -> Result<Task>;

    /// Delete a task by id
    async fn delete(&self, id: u64) -> Result<()>;
}
