use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required field was empty or blank.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The planet name collides with an already persisted planet.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// An operation that requires an existing row found none.
    #[error("Planet not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
