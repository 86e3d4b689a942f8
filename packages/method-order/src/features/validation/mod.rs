//! Order validation.
//!
//! High-water-mark scan over a class's classified members plus the
//! one-model-per-file guard. Validation never short-circuits: every member
//! is checked even after a violation.

use crate::shared::models::{ClassDecl, ClassifiedMember, Diagnostic, CANONICAL_ORDER};

/// Check that member categories never move backwards in the canonical
/// order.
///
/// The mark is re-recorded on every forward or equal step, so a violation
/// cites the member that established the conflicting mark, not merely the
/// previous list entry. Members with a category outside the canonical order
/// are reported as unknown and do not move the mark; this path is
/// unreachable with [`DefaultClassifier`](crate::DefaultClassifier) and
/// exists for pluggable classifiers.
pub fn validate_order(path: &str, members: &[ClassifiedMember]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    // highest canonical index seen so far, with the member that set it
    let mut mark: Option<(usize, &ClassifiedMember)> = None;

    for member in members {
        let index = match member.category.canonical_index() {
            Some(index) => index,
            None => {
                diagnostics.push(Diagnostic::UnknownCategory {
                    path: path.to_string(),
                    line: member.line,
                    category: member.category.as_str().to_string(),
                    name: member.name.clone(),
                });
                continue;
            }
        };

        match mark {
            Some((max_index, setter)) if index < max_index => {
                diagnostics.push(Diagnostic::OrderViolation {
                    path: path.to_string(),
                    line: member.line,
                    name: member.name.clone(),
                    category: member.category.as_str().to_string(),
                    expected_before: CANONICAL_ORDER[max_index].as_str().to_string(),
                    prev_category: setter.category.as_str().to_string(),
                    prev_name: setter.name.clone(),
                    prev_line: setter.line,
                });
            }
            _ => mark = Some((index, member)),
        }
    }
    diagnostics
}

/// Exactly one diagnostic when a file holds more than one model class.
/// Independent of and additive to per-class order validation.
pub fn check_single_model(path: &str, classes: &[ClassDecl]) -> Option<Diagnostic> {
    (classes.len() > 1).then(|| Diagnostic::MultipleModels {
        path: path.to_string(),
        count: classes.len(),
    })
}
