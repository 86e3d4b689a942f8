//! Diagnostic records emitted by the validation layer.
//!
//! Diagnostics are pure outputs: once created they are never fed back into
//! classification or validation. `Display` renders the exact line format the
//! pre-commit boundary prints.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A member's category moved backwards in the canonical order.
    OrderViolation {
        path: String,
        line: u32,
        name: String,
        category: String,
        /// Category at the high-water mark the member should have preceded.
        expected_before: String,
        /// The member that established the conflicting mark.
        prev_category: String,
        prev_name: String,
        prev_line: u32,
    },
    /// A classifier produced a category outside the canonical order.
    UnknownCategory {
        path: String,
        line: u32,
        category: String,
        name: String,
    },
    /// More than one model class in a single file.
    MultipleModels { path: String, count: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OrderViolation {
                path,
                line,
                name,
                category,
                expected_before,
                prev_category,
                prev_name,
                prev_line,
            } => write!(
                f,
                "{path}:{line}: '{name}' (category '{category}') appears out of order. \
                 Should be before '{expected_before}' (before '{prev_category}->{prev_name}:{prev_line}')"
            ),
            Diagnostic::UnknownCategory {
                path,
                line,
                category,
                name,
            } => write!(f, "{path}:{line}: Unknown category '{category}' in '{name}'"),
            Diagnostic::MultipleModels { path, count } => write!(
                f,
                "{path}: ERROR: Multiple Odoo models found in the same file ({count} classes)."
            ),
        }
    }
}
