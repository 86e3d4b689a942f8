//! Declaration data model produced by the parsing adapter.

use crate::shared::models::Category;

/// A decorator attached to a method, reduced to the shapes the classifier
/// distinguishes: `@name`, `@mod.name`, and an invocation of either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierTag {
    /// `@constrains`
    Plain(String),
    /// `@api.constrains` — holds the final attribute component.
    Qualified(String),
    /// `@api.constrains("name")` — wraps the callee's shape.
    Invoked(Box<ModifierTag>),
}

impl ModifierTag {
    /// Canonical tag name: strips any invocation and returns the innermost
    /// name or attribute token. Total — unrecognized decorator shapes carry
    /// an empty name, which matches no classification rule.
    pub fn resolve(&self) -> &str {
        match self {
            ModifierTag::Plain(name) | ModifierTag::Qualified(name) => name,
            ModifierTag::Invoked(inner) => inner.resolve(),
        }
    }
}

/// Shape of an assignment's right-hand side, kept just precise enough to
/// recognize field-factory calls (`fields.Char(...)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RhsShape {
    /// A call whose callee is `<root>.<attr>` with `<root>` a plain name.
    AttributeCall { root: String },
    /// Anything else.
    Other,
}

/// One member of a class body. Order of members is the syntactic order in
/// the class body and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDecl {
    Method {
        name: String,
        tags: Vec<ModifierTag>,
        line: u32,
    },
    Attribute {
        /// Simple-name assignment targets (`a = b = ...` yields both).
        targets: Vec<String>,
        rhs: RhsShape,
        line: u32,
    },
}

impl MemberDecl {
    pub fn line(&self) -> u32 {
        match self {
            MemberDecl::Method { line, .. } | MemberDecl::Attribute { line, .. } => *line,
        }
    }

    /// Name used in diagnostics: the method name or the first target.
    pub fn display_name(&self) -> &str {
        match self {
            MemberDecl::Method { name, .. } => name,
            MemberDecl::Attribute { targets, .. } => {
                targets.first().map(String::as_str).unwrap_or("<unnamed>")
            }
        }
    }
}

/// Reference to a base class in a `class` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseRef {
    /// `models` in `models.Model`; `None` for a bare `Model`.
    pub qualifier: Option<String>,
    pub name: String,
}

/// A top-level class declaration with its body members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub line: u32,
    pub bases: Vec<BaseRef>,
    pub members: Vec<MemberDecl>,
}

/// A member after classification. Derived once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMember {
    pub category: Category,
    pub line: u32,
    pub name: String,
}
