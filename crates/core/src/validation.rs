//! Small field checks shared by the request DTOs.

use crate::error::CoreError;

/// Reject an empty or whitespace-only string field.
pub fn require_non_blank(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
