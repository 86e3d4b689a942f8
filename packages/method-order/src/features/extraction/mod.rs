//! Model class extraction.
//!
//! Filters a module's top-level classes down to the ones deriving from an
//! Odoo model base, preserving source order. Pure: membership is decided
//! once per file and never recomputed.

use crate::shared::constants::{MODEL_BASES, MODEL_NAMESPACE};
use crate::shared::models::{BaseRef, ClassDecl};

/// True when the base reference names a recognized model base kind, either
/// bare (`Model`) or rooted at the models namespace (`models.Model`).
fn is_model_base(base: &BaseRef) -> bool {
    if !MODEL_BASES.contains(&base.name.as_str()) {
        return false;
    }
    match &base.qualifier {
        None => true,
        Some(qualifier) => qualifier == MODEL_NAMESPACE,
    }
}

/// Keep only the classes that qualify as Odoo models.
pub fn extract_model_classes(classes: Vec<ClassDecl>) -> Vec<ClassDecl> {
    classes
        .into_iter()
        .filter(|class| class.bases.iter().any(is_model_base))
        .collect()
}
