//! Language-neutral syntax node representation
//!
//! Nodes live in a `SyntaxTree` arena and refer to each other by `NodeId`.

use crate::shared::models::{NodeId, Span, SyntaxKind};
use std::ops::Range;

/// Arena node
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,

    /// Byte range of the node's text in the tree source
    pub byte_range: Range<usize>,

    /// Declared or invoked name: class/method/declarator/call name,
    /// identifier text, type name for catch types and supertypes
    pub name: Option<String>,

    /// Declared type text for fields, locals and parameters
    pub declared_type: Option<String>,

    pub parent: Option<NodeId>,

    /// Children in source order
    pub children: Vec<NodeId>,

    /// Original tree-sitter kind (for debugging)
    pub raw_kind: Option<String>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self {
            kind,
            span,
            byte_range: 0..0,
            name: None,
            declared_type: None,
            parent: None,
            children: Vec::new(),
            raw_kind: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_declared_type(mut self, ty: impl Into<String>) -> Self {
        self.declared_type = Some(ty.into());
        self
    }

    pub fn with_byte_range(mut self, range: Range<usize>) -> Self {
        self.byte_range = range;
        self
    }

    pub fn with_raw_kind(mut self, raw_kind: impl Into<String>) -> Self {
        self.raw_kind = Some(raw_kind.into());
        self
    }
}
