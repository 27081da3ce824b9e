use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}

/// Non-blank string no longer than `max` characters.
pub fn require_text(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

/// Reference ids are store-assigned and therefore always >= 1.
pub fn require_ref(field: &str, id: i32) -> Result<(), ModelError> {
    if id <= 0 {
        return Err(ModelError::Validation(format!("{field} must be a positive id")));
    }
    Ok(())
}
