//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The referenced task id does not exist in the store.
    #[error("Tarea no encontrada")]
    TaskNotFound(u64),

    /// The title is missing or empty after trimming.
    #[error("El título es obligatorio")]
    EmptyTitle,
}
