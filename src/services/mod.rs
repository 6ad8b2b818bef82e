//! Query services for each catalog entity.
//!
//! Services are stateless free functions over a repository. Reads and creates
//! surface storage failures as [`ServiceError`]; updates and deletes log them
//! and report `false`.

pub mod vehicle_make;
pub mod vehicle_model;

pub use pushkind_common::services::errors::{ServiceError, ServiceResult};
