//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Generation errors - failures while producing text through a provider.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No suitable model found for text generation")]
    NoSuitableModel,

    #[error("Text provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Failed to generate content: {0}")]
    GenerationFailed(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
