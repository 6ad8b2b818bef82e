//! Domain aggregates exposed by the catalog service layer.

pub mod filtering;
pub mod types;
pub mod vehicle_make;
pub mod vehicle_model;
