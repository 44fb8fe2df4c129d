//! Allergy domain error types.

use thiserror::Error;

/// Errors that can occur in the allergy domain layer.
#[derive(Debug, Error)]
pub enum AllergyError {
    /// No record matches the requested id or name.
    #[error("Allergy not found: {0}")]
    NotFound(String),

    /// A symptom analysis was requested with no symptoms.
    #[error("No symptoms provided")]
    NoSymptoms,
}

impl AllergyError {
    /// Create a new "not found" error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }
}
