//! Shared data model.
//!
//! Owned, immutable types produced by the parsing adapter and consumed by
//! extraction, classification and validation. Downstream code depends only
//! on these types, never on tree-sitter nodes.

mod category;
mod diagnostic;
mod member;

pub use category::{Category, CANONICAL_ORDER};
pub use diagnostic::Diagnostic;
pub use member::{BaseRef, ClassDecl, ClassifiedMember, MemberDecl, ModifierTag, RhsShape};
