//! tree-sitter adapter for Odoo addon sources.
//!
//! Materializes the top-level class declarations of a Python module into
//! owned, immutable values. Everything downstream (extraction,
//! classification, validation) consumes those values; tree-sitter node types
//! never leak out of this module.
//!
//! Lines are 1-indexed. Docstrings and statements that are neither methods
//! nor attribute assignments are not class members and are skipped. A
//! decorated method's line is the `def` line, not the decorator's.

use crate::errors::{CheckError, Result};
use crate::shared::models::{BaseRef, ClassDecl, MemberDecl, ModifierTag, RhsShape};
use tree_sitter::{Node, Parser};

/// Parse a module and return its top-level class declarations in source
/// order.
///
/// A tree containing syntax errors is rejected outright: a structurally
/// broken file must fail loudly rather than be reported as "no issues".
pub fn parse_classes(path: &str, source: &str) -> Result<Vec<ClassDecl>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::language())
        .map_err(|e| CheckError::parse_error(format!("failed to load Python grammar: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| CheckError::parse_error(format!("{path}: parser returned no tree")))?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(CheckError::parse_error(format!(
            "{path}: invalid Python syntax"
        )));
    }

    let mut classes = Vec::new();
    for i in 0..root.child_count() {
        if let Some(stmt) = root.child(i) {
            let class_node = match stmt.kind() {
                "class_definition" => Some(stmt),
                // a decorated top-level class is wrapped in decorated_definition
                "decorated_definition" => find_child_by_kind(&stmt, "class_definition"),
                _ => None,
            };
            if let Some(node) = class_node {
                classes.push(extract_class(&node, source));
            }
        }
    }
    Ok(classes)
}

// ═══════════════════════════════════════════════════════════════════════════
// Class Extraction
// ═══════════════════════════════════════════════════════════════════════════

fn extract_class(class_node: &Node, source: &str) -> ClassDecl {
    let name = class_node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();

    let members = find_child_by_kind(class_node, "block")
        .map(|block| extract_members(&block, source))
        .unwrap_or_default();

    ClassDecl {
        name,
        line: node_line(class_node),
        bases: extract_bases(class_node, source),
        members,
    }
}

fn extract_bases(class_node: &Node, source: &str) -> Vec<BaseRef> {
    let mut bases = Vec::new();
    if let Some(args) = find_child_by_kind(class_node, "argument_list") {
        for i in 0..args.child_count() {
            if let Some(arg) = args.child(i) {
                match arg.kind() {
                    "identifier" => bases.push(BaseRef {
                        qualifier: None,
                        name: node_text(&arg, source).to_string(),
                    }),
                    "attribute" => {
                        // `models.Model`. A deeper qualifier keeps its full
                        // text and simply never matches the models namespace.
                        let qualifier = arg
                            .child_by_field_name("object")
                            .map(|obj| node_text(&obj, source).to_string());
                        let name = arg
                            .child_by_field_name("attribute")
                            .map(|attr| node_text(&attr, source).to_string())
                            .unwrap_or_default();
                        bases.push(BaseRef { qualifier, name });
                    }
                    // keyword arguments (metaclass=...) are not base refs
                    _ => {}
                }
            }
        }
    }
    bases
}

// ═══════════════════════════════════════════════════════════════════════════
// Member Extraction
// ═══════════════════════════════════════════════════════════════════════════

fn extract_members(block: &Node, source: &str) -> Vec<MemberDecl> {
    let mut members = Vec::new();
    for i in 0..block.child_count() {
        if let Some(stmt) = block.child(i) {
            match stmt.kind() {
                "function_definition" => {
                    members.push(extract_method(&stmt, source, Vec::new()));
                }
                "decorated_definition" => {
                    // nested decorated classes are not members
                    if let Some(func) = find_child_by_kind(&stmt, "function_definition") {
                        let tags = extract_tags(&stmt, source);
                        members.push(extract_method(&func, source, tags));
                    }
                }
                "expression_statement" => {
                    // docstrings and bare expressions are not members
                    if let Some(expr) = stmt.child(0) {
                        if expr.kind() == "assignment" {
                            members.push(extract_attribute(&expr, source, node_line(&stmt)));
                        }
                    }
                }
                _ => {}
            }
        }
    }
    members
}

fn extract_method(func: &Node, source: &str, tags: Vec<ModifierTag>) -> MemberDecl {
    let name = func
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();
    MemberDecl::Method {
        name,
        tags,
        line: node_line(func),
    }
}

fn extract_tags(decorated: &Node, source: &str) -> Vec<ModifierTag> {
    let mut tags = Vec::new();
    for i in 0..decorated.child_count() {
        if let Some(child) = decorated.child(i) {
            if child.kind() == "decorator" {
                if let Some(expr) = child.named_child(0) {
                    tags.push(tag_from_expr(&expr, source));
                }
            }
        }
    }
    tags
}

fn tag_from_expr(expr: &Node, source: &str) -> ModifierTag {
    match expr.kind() {
        "identifier" => ModifierTag::Plain(node_text(expr, source).to_string()),
        "attribute" => ModifierTag::Qualified(
            expr.child_by_field_name("attribute")
                .map(|attr| node_text(&attr, source).to_string())
                .unwrap_or_default(),
        ),
        "call" => {
            let inner = expr
                .child_by_field_name("function")
                .map(|callee| tag_from_expr(&callee, source))
                .unwrap_or(ModifierTag::Plain(String::new()));
            ModifierTag::Invoked(Box::new(inner))
        }
        // unrecognized shapes resolve to the empty string
        _ => ModifierTag::Plain(String::new()),
    }
}

fn extract_attribute(assign: &Node, source: &str, line: u32) -> MemberDecl {
    let mut targets = Vec::new();
    let mut node = *assign;
    // chained assignment (`a = b = fields.Char()`) nests on the right
    let value = loop {
        if let Some(left) = node.child_by_field_name("left") {
            if left.kind() == "identifier" {
                targets.push(node_text(&left, source).to_string());
            }
        }
        match node.child_by_field_name("right") {
            Some(right) if right.kind() == "assignment" => node = right,
            other => break other,
        }
    };

    let rhs = value
        .map(|v| rhs_shape(&v, source))
        .unwrap_or(RhsShape::Other);
    MemberDecl::Attribute { targets, rhs, line }
}

fn rhs_shape(value: &Node, source: &str) -> RhsShape {
    // One attribute level only: `fields.Char(...)`. Aliased or computed
    // factory references are not recognized.
    if value.kind() == "call" {
        if let Some(callee) = value.child_by_field_name("function") {
            if callee.kind() == "attribute" {
                if let Some(object) = callee.child_by_field_name("object") {
                    if object.kind() == "identifier" {
                        return RhsShape::AttributeCall {
                            root: node_text(&object, source).to_string(),
                        };
                    }
                }
            }
        }
    }
    RhsShape::Other
}

// ═══════════════════════════════════════════════════════════════════════════
// Node Utilities
// ═══════════════════════════════════════════════════════════════════════════

#[inline]
fn find_child_by_kind<'a>(node: &'a Node, kind: &str) -> Option<Node<'a>> {
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.kind() == kind {
                return Some(child);
            }
        }
    }
    None
}

#[inline]
fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// 1-indexed source line of a node.
#[inline]
fn node_line(node: &Node) -> u32 {
    node.start_position().row as u32 + 1
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
