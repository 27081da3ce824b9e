use sea_orm::DbErr;
use thiserror::Error;

/// Outcomes other than success. Absence on a lookup is not an error and is
/// returned as `Option::None` / an empty `Vec` instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn conflict(entity: &str) -> Self { Self::Conflict(format!("{} was not persisted", entity)) }

    /// Validation failures are detected before storage is touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Model(models::errors::ModelError::Validation(_)))
    }
}
