//! Centralized checker configuration.
//!
//! All recognition tables live here: model base kinds, the field-factory
//! namespace, reserved identifiers, decorator spellings, and the CRUD name
//! set. Everything is read-only and initialized once, so it is safe to share
//! across parallel file analysis.

use ahash::AHashSet;
use once_cell::sync::Lazy;

/// Base class names that mark a class as an Odoo model.
pub const MODEL_BASES: [&str; 3] = ["Model", "AbstractModel", "TransientModel"];

/// Namespace a qualified base reference must be rooted at (`models.Model`).
pub const MODEL_NAMESPACE: &str = "models";

/// Namespace of the field factory (`fields.Char(...)`).
pub const FIELD_FACTORY: &str = "fields";

/// Reserved assignment target for SQL constraint tables.
pub const SQL_CONSTRAINTS_TARGET: &str = "_sql_constraints";

/// Decorator names marking constraint methods. Odoo spells it `constrains`;
/// the legacy `constraints` spelling is kept for backward compatibility.
pub const CONSTRAINS_DECORATORS: [&str; 2] = ["constrains", "constraints"];

/// Decorator name marking onchange methods.
pub const ONCHANGE_DECORATOR: &str = "onchange";

/// ORM method names that belong to the CRUD category.
pub static CRUD_METHODS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "create",
        "write",
        "unlink",
        "copy",
        "read",
        "search",
        "search_count",
        "name_get",
        "name_search",
        "toggle_active",
    ]
    .into_iter()
    .collect()
});
