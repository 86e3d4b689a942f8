//! Member classification.
//!
//! Maps one member declaration to exactly one [`Category`]. Classification
//! is two disjoint rule chains, evaluated top to bottom, first match wins.
//! The rule order is part of the contract: `_sql_constraints` must classify
//! as `sql_constraints` even though the leading-underscore rule would also
//! match it.

use crate::shared::constants::{
    CONSTRAINS_DECORATORS, CRUD_METHODS, FIELD_FACTORY, ONCHANGE_DECORATOR, SQL_CONSTRAINTS_TARGET,
};
use crate::shared::models::{Category, ClassifiedMember, MemberDecl, ModifierTag, RhsShape};

/// Classification seam.
///
/// [`DefaultClassifier`] covers the canonical rule set; a custom classifier
/// may emit [`Category::Custom`] values, which the validator reports as
/// unknown categories.
pub trait MemberClassifier {
    fn classify(&self, member: &MemberDecl) -> Category;
}

/// The built-in rule chains.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultClassifier;

impl MemberClassifier for DefaultClassifier {
    fn classify(&self, member: &MemberDecl) -> Category {
        match member {
            MemberDecl::Attribute { targets, rhs, .. } => classify_attribute(targets, rhs),
            MemberDecl::Method { name, tags, .. } => classify_method(name, tags),
        }
    }
}

fn classify_attribute(targets: &[String], rhs: &RhsShape) -> Category {
    if targets.iter().any(|t| t == SQL_CONSTRAINTS_TARGET) {
        return Category::SqlConstraints;
    }
    if targets.iter().any(|t| t.starts_with('_')) {
        return Category::PrivateAttributes;
    }
    if matches!(rhs, RhsShape::AttributeCall { root } if root == FIELD_FACTORY) {
        return Category::FieldDeclarations;
    }
    Category::OtherMethods
}

fn classify_method(name: &str, tags: &[ModifierTag]) -> Category {
    if name == "default_get" || name == "default" || name.starts_with("_default_") {
        return Category::DefaultMethods;
    }
    if name.starts_with("_domain_") || name.starts_with("_selection_") {
        return Category::SelectionComputedMethods;
    }
    if name.starts_with("_compute_") || name.starts_with("_inverse_") || name.starts_with("_search_")
    {
        return Category::ComputeInverseSearch;
    }
    if has_tag(tags, |tag| CONSTRAINS_DECORATORS.contains(&tag)) {
        return Category::ConstraintsMethods;
    }
    if has_tag(tags, |tag| tag == ONCHANGE_DECORATOR) || name.starts_with("_onchange_") {
        return Category::OnchangeMethods;
    }
    if CRUD_METHODS.contains(name) {
        return Category::CrudMethods;
    }
    if name.starts_with("action_") {
        return Category::ActionMethods;
    }
    Category::OtherMethods
}

fn has_tag(tags: &[ModifierTag], wanted: impl Fn(&str) -> bool) -> bool {
    tags.iter().any(|tag| wanted(tag.resolve()))
}

/// Classify every member of a class body, preserving declaration order.
pub fn classify_members<C: MemberClassifier>(
    classifier: &C,
    members: &[MemberDecl],
) -> Vec<ClassifiedMember> {
    members
        .iter()
        .map(|member| ClassifiedMember {
            category: classifier.classify(member),
            line: member.line(),
            name: member.display_name().to_string(),
        })
        .collect()
}
