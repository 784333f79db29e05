use crate::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} at index {index}")]
    NotFound { entity: &'static str, index: usize },

    #[error("Validation failed: {0}")]
    InvalidFields(ValidationErrors),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("No models to export")]
    NothingToExport,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::InvalidFields(errors)
    }
}
