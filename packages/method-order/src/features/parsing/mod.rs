//! Parsing Feature
//!
//! Responsible for turning raw Python source into the owned declaration
//! model in [`crate::shared::models`].

mod python;

pub use python::parse_classes;
