//! DTOs that bridge services with templates and callers.

pub mod vehicle_make;
pub mod vehicle_model;
