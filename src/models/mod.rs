//! Database models shared across the catalog repository.

pub mod config;
pub mod vehicle_make;
pub mod vehicle_model;
