//! Business rules of the trip registration workflow.
//!
//! Services are plain functions generic over the repository traits they need,
//! so HTTP handlers pass a [`crate::repository::DieselRepository`] and tests
//! pass a mock.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod clients;
pub mod trips;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate business key or duplicate registration.
    #[error("{0}")]
    Conflict(String),

    /// Operation is not allowed in the current state of the data.
    #[error("{0}")]
    InvalidState(String),

    /// Request payload failed validation.
    #[error("{0}")]
    Form(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
