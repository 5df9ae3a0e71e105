//! Core library for the Gestor de Tareas
//!
//! This crate contains the domain logic:
//! - The `Task` model and its JSON contract
//! - The in-memory task store and its repository trait
//! - The error taxonomy shared with the API server

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
