use thiserror::Error;

pub mod listing;

/// Errors surfaced by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
