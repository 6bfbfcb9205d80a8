//! Core library for the todo tracker
//!
//! This crate contains the core business logic, including:
//! - Task model and partial updates
//! - Task storage behind a repository trait
//! - The task service enforcing validation and title uniqueness

pub mod error;
pub mod task;

pub use error::{Error, ValidationError};
pub type Result<T> = std::result::Result<T, Error>;
