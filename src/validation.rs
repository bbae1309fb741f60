//! Input validation for author and book records.

use crate::error::{BookshelfError, Result};

/// Maximum allowed length for an author or book name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Validates an author or book name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BookshelfError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }
    // The limit is on characters, not encoded bytes
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(BookshelfError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}
