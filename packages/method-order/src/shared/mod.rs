//! Shared data model and lookup tables.

pub mod constants;
pub mod models;
