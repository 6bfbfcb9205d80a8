//! Error types for the core library

use thiserror::Error;

use crate::task::{TaskId, MAX_TITLE_LENGTH};

/// Input that violates the id or title format rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ID must be a positive integer, got {id}")]
    InvalidId { id: TaskId },

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title cannot exceed {max} characters, got {length}")]
    TitleTooLong { length: usize, max: usize },
}

impl ValidationError {
    pub(crate) fn title_too_long(length: usize) -> Self {
        Self::TitleTooLong {
            length,
            max: MAX_TITLE_LENGTH,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A todo with title '{title}' already exists")]
    DuplicateTitle { title: String },

    #[error("No task ids left to allocate")]
    IdsExhausted,
}

impl Error {
    /// Whether this error came from a malformed id or title
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err: Error = ValidationError::InvalidId { id: -3 }.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "ID must be a positive integer, got -3");

        let err: Error = ValidationError::title_too_long(501).into();
        assert_eq!(
            err.to_string(),
            "Title cannot exceed 500 characters, got 501"
        );
    }

    #[test]
    fn test_duplicate_title_message() {
        let err = Error::DuplicateTitle {
            title: "Buy milk".to_string(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "A todo with title 'Buy milk' already exists");
    }

    #[test]
    fn test_ids_exhausted_message() {
        let err = Error::IdsExhausted;
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "No task ids left to allocate");
    }
}
