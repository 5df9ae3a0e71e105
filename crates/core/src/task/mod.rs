//! Task module
//!
//! This module contains task-related types and storage.

mod mem_store;
mod model;
mod repository;

pub use mem_store::MemTaskStore;
pub use model::Task;
pub use repository::TaskRepository;
