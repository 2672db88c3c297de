//! Syntax tree arena
//!
//! One compilation unit: nodes in a `Vec`, addressed by `NodeId`, with a
//! parent index and ordered children. Node 0 is the compilation unit.

use super::syntax_node::SyntaxNode;
use crate::features::lifecycle::domain::CallSite;
use crate::shared::models::{NodeId, Span, SyntaxKind};
use crate::shared::ports::TreeWalker;

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

/// Parsed compilation unit
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,

    /// Source code
    pub source: String,

    /// File path (for messages)
    pub file_path: String,

    /// Recoverable parse errors; the tree is still usable
    pub errors: Vec<ParseError>,
}

impl SyntaxTree {
    /// Tree containing only the compilation-unit root
    pub fn new(source: impl Into<String>, file_path: impl Into<String>) -> Self {
        let source = source.into();
        let root = SyntaxNode::new(SyntaxKind::CompilationUnit, Span::zero()).with_byte_range(0..source.len());
        Self {
            nodes: vec![root],
            source,
            file_path: file_path.into(),
            errors: Vec::new(),
        }
    }

    /// Append `node` under `parent`
    pub fn push(&mut self, parent: NodeId, mut node: SyntaxNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = Some(parent);
        self.nodes.push(node);
        if let Some(parent_node) = self.nodes.get_mut(parent.index()) {
            parent_node.children.push(id);
        }
        id
    }

    pub fn with_errors(mut self, errors: Vec<ParseError>) -> Self {
        self.errors = errors;
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SyntaxNode {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Source text of a node
    pub fn text(&self, id: NodeId) -> &str {
        self.source.get(self.node(id).byte_range.clone()).unwrap_or("")
    }

    pub fn declared_type(&self, id: NodeId) -> Option<&str> {
        self.node(id).declared_type.as_deref()
    }

    /// Preorder (depth-first, source order) walk from `start`
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![start],
        }
    }

    /// Nodes of `kind`, in depth-first order
    pub fn nodes_of_kind<'a>(&'a self, kind: &'a SyntaxKind) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(self.root())
            .filter(move |&id| self.node(id).kind == *kind)
    }

    /// Call site of a `CallExpr` node
    ///
    /// A call's children are its explicit receiver (if any) followed by
    /// its argument list.
    pub fn call_site(&self, id: NodeId) -> Option<CallSite> {
        let node = self.node(id);
        if node.kind != SyntaxKind::CallExpr {
            return None;
        }
        let name = node.name.as_deref()?;

        let mut call = CallSite::new(name, id, node.span);
        for &child in &node.children {
            match self.node(child).kind {
                SyntaxKind::ArgumentList => {
                    let arguments: Vec<&str> = self
                        .node(child)
                        .children
                        .iter()
                        .map(|&arg| self.text(arg))
                        .collect();
                    call = call.with_arguments(arguments);
                }
                _ if call.receiver.is_none() => call = call.with_receiver(child),
                _ => {}
            }
        }
        Some(call)
    }

    /// Every call site in the unit, in depth-first order
    pub fn call_sites(&self) -> Vec<CallSite> {
        self.nodes_of_kind(&SyntaxKind::CallExpr)
            .filter_map(|id| self.call_site(id))
            .collect()
    }

    /// Line count of the source
    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }
}

impl TreeWalker for SyntaxTree {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    fn kind(&self, node: NodeId) -> &SyntaxKind {
        &self.node(node).kind
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.node(node).name.as_deref()
    }
}

/// Preorder iterator over a subtree
pub struct Descendants<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(id).children.iter().rev().copied());
        Some(id)
    }
}

/// Hand-built trees for tests and non-Java hosts
///
/// Expression text is appended to the tree's source so `text()` and
/// argument keys work as they do for parsed trees.
#[derive(Debug)]
pub struct SyntaxTreeBuilder {
    tree: SyntaxTree,
}

impl Default for SyntaxTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: SyntaxTree::new("", "<synthetic>"),
        }
    }

    pub fn file_path(mut self, path: impl Into<String>) -> Self {
        self.tree.file_path = path.into();
        self
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Structural node (class, method, block, try, ...)
    pub fn node(&mut self, parent: NodeId, kind: SyntaxKind, name: Option<&str>) -> NodeId {
        let mut node = SyntaxNode::new(kind, Span::zero());
        node.name = name.map(str::to_string);
        self.tree.push(parent, node)
    }

    /// Expression node whose source text is `text`
    pub fn expr(&mut self, parent: NodeId, kind: SyntaxKind, text: &str) -> NodeId {
        let range = self.append_source(text);
        let mut node = SyntaxNode::new(kind, Span::zero()).with_byte_range(range);
        if node.kind == SyntaxKind::Identifier {
            node.name = Some(text.to_string());
        }
        self.tree.push(parent, node)
    }

    /// Declaration of `name` with declared type `ty`
    ///
    /// Fields and locals get a `Declarator` child carrying the name;
    /// parameters carry the name themselves. Returns the node that carries
    /// the name.
    pub fn declaration(&mut self, parent: NodeId, kind: SyntaxKind, ty: &str, name: &str) -> NodeId {
        let is_parameter = kind == SyntaxKind::ParameterDecl;
        let mut decl = SyntaxNode::new(kind, Span::zero()).with_declared_type(ty);
        if is_parameter {
            decl.name = Some(name.to_string());
            return self.tree.push(parent, decl);
        }
        let decl = self.tree.push(parent, decl);
        self.node(decl, SyntaxKind::Declarator, Some(name))
    }

    /// `receiver.name(args...)` (or `name(args...)` without a receiver)
    pub fn call(&mut self, parent: NodeId, name: &str, receiver: Option<&str>, args: &[&str], span: Span) -> NodeId {
        let call = self
            .tree
            .push(parent, SyntaxNode::new(SyntaxKind::CallExpr, span).with_name(name));

        if let Some(receiver) = receiver {
            let kind = match receiver {
                "this" => SyntaxKind::This,
                "super" => SyntaxKind::Super,
                _ => SyntaxKind::Identifier,
            };
            self.expr(call, kind, receiver);
        }

        let list = self.node(call, SyntaxKind::ArgumentList, None);
        for arg in args {
            self.expr(list, SyntaxKind::Identifier, arg);
        }
        call
    }

    pub fn set_span(&mut self, id: NodeId, span: Span) {
        self.tree.node_mut(id).span = span;
    }

    pub fn build(self) -> SyntaxTree {
        self.tree
    }

    fn append_source(&mut self, text: &str) -> std::ops::Range<usize> {
        if !self.tree.source.is_empty() {
            self.tree.source.push(' ');
        }
        let start = self.tree.source.len();
        self.tree.source.push_str(text);
        start..self.tree.source.len()
    }
}
