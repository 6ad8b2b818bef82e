//! Error conversion glue between the domain layer and the service/repository
//! error types.
//!
//! The domain layer must not depend on service or repository errors, so the
//! conversions live here.

use pushkind_common::repository::errors::RepositoryError;
#[cfg(feature = "server")]
use pushkind_common::services::errors::ServiceError;

use crate::domain::types::TypeConstraintError;

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
