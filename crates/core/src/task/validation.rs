//! Id and title format rules shared by service operations

use super::model::TaskId;
use crate::error::ValidationError;

/// Maximum title length in characters (Unicode scalar values)
pub const MAX_TITLE_LENGTH: usize = 500;

pub fn validate_id(id: TaskId) -> Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::InvalidId { id });
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(ValidationError::title_too_long(length));
    }
    Ok(())
}
