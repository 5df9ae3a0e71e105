//! Route handlers

pub mod frontend;
pub mod info;
pub mod task;
