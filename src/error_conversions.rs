//! Error conversion glue between the pure `data` layer and the service layer.
//!
//! The domain, translator and pagination modules must not depend on service
//! or repository error types, so the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::pagination::PaginationError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<PaginationError> for ServiceError {
    fn from(val: PaginationError) -> Self {
        ServiceError::InvalidArgument(val.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Unauthorized => ServiceError::Unauthorized,
            other => ServiceError::Backend(other.to_string()),
        }
    }
}
