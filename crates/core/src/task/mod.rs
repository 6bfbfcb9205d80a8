//! Task module
//!
//! This module contains task-related types and logic.

mod memory_store;
mod model;
mod repository;
mod service;
mod validation;

pub use memory_store::InMemoryTaskStore;
pub use model::*;
pub use repository::TaskRepository;
pub use service::TaskService;
pub use validation::{validate_id, validate_title, MAX_TITLE_LENGTH};
