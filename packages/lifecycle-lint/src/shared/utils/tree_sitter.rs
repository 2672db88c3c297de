//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter CST nodes in the Java
//! front end.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Named children in source order
pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node.named_children(&mut cursor).collect();
    children
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn extract_node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn extract_node_text_owned(node: &Node, source: &str) -> String {
    extract_node_text(node, source).to_string()
}

/// Text of the child stored under `field`
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| extract_node_text_owned(&child, source))
        .filter(|text| !text.is_empty())
}

/// Type name of a Java type node without generics, annotations or array dims
///
/// `List<String>` → `List`, `GoogleApiClient.Builder` → `GoogleApiClient.Builder`,
/// `@NonNull Foo[]` → `Foo`.
pub fn java_type_name(node: &Node, source: &str) -> String {
    match node.kind() {
        "generic_type" => named_children(node)
            .first()
            .map(|base| java_type_name(base, source))
            .unwrap_or_default(),
        "annotated_type" => named_children(node)
            .last()
            .map(|inner| java_type_name(inner, source))
            .unwrap_or_default(),
        "array_type" => node
            .child_by_field_name("element")
            .map(|element| java_type_name(&element, source))
            .unwrap_or_default(),
        _ => extract_node_text(node, source)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
