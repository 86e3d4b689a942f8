//! Member categories and their canonical order.

use std::fmt;

/// Category assigned to one class member.
///
/// The eleven canonical categories are totally ordered (see
/// [`CANONICAL_ORDER`]). `Custom` covers categories emitted by non-default
/// classifiers; it has no position in the canonical order and is reported by
/// the validator as unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    PrivateAttributes,
    FieldDeclarations,
    SqlConstraints,
    DefaultMethods,
    SelectionComputedMethods,
    ComputeInverseSearch,
    ConstraintsMethods,
    OnchangeMethods,
    CrudMethods,
    ActionMethods,
    OtherMethods,
    Custom(String),
}

/// The order categories must follow inside a model class.
pub const CANONICAL_ORDER: [Category; 11] = [
    Category::PrivateAttributes,
    Category::FieldDeclarations,
    Category::SqlConstraints,
    Category::DefaultMethods,
    Category::SelectionComputedMethods,
    Category::ComputeInverseSearch,
    Category::ConstraintsMethods,
    Category::OnchangeMethods,
    Category::CrudMethods,
    Category::ActionMethods,
    Category::OtherMethods,
];

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::PrivateAttributes => "private_attributes",
            Category::FieldDeclarations => "field_declarations",
            Category::SqlConstraints => "sql_constraints",
            Category::DefaultMethods => "default_methods",
            Category::SelectionComputedMethods => "selection_computed_methods",
            Category::ComputeInverseSearch => "compute_inverse_search",
            Category::ConstraintsMethods => "constraints_methods",
            Category::OnchangeMethods => "onchange_methods",
            Category::CrudMethods => "crud_methods",
            Category::ActionMethods => "action_methods",
            Category::OtherMethods => "other_methods",
            Category::Custom(name) => name,
        }
    }

    /// Position in [`CANONICAL_ORDER`], `None` for custom categories.
    pub fn canonical_index(&self) -> Option<usize> {
        CANONICAL_ORDER.iter().position(|c| c == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
