//! Feature modules.
//!
//! Vertical slices of the checker pipeline:
//! parsing → extraction → classification → validation → reporting.

pub mod classification;
pub mod extraction;
pub mod parsing;
pub mod reporting;
pub mod validation;
