//! Request payloads accepted by the trip registry routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod registration;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid PESEL")]
    InvalidPesel,

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}
