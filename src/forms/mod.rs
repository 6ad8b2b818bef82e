//! Form definitions backing the catalog routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod vehicle_make;
pub mod vehicle_model;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}
