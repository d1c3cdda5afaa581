use std::collections::BTreeMap;

use thiserror::Error;

/// Per-field validation messages, keyed by payload field name.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },
}

impl ModelError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation { message: "Input payload validation failed".into(), errors }
    }

    pub fn field_errors(&self) -> &FieldErrors {
        match self {
            Self::Validation { errors, .. } => errors,
        }
    }
}
