//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives. The Java CST is folded
//! into the language-neutral `SyntaxTree`:
//!
//! - type declarations → `ClassDef` (+ `Supertype` per extends/implements)
//! - methods, constructors → `MethodDef` (+ `ParameterDecl`)
//! - lambdas → `LambdaDef`; anonymous class bodies → `AnonymousClass`
//! - method invocations → `CallExpr` [receiver?, `ArgumentList`]
//! - try / try-with-resources → `TryStmt` [`TryResources`?, `Block`,
//!   `CatchClause`* [`CatchType`+, `ParameterDecl`, `Block`], `FinallyClause`?]
//! - fields / locals → `FieldDecl` / `VariableDecl` [`Declarator`+]
//!
//! Everything else is kept as `Other(kind)` so ancestry stays intact.

use tree_sitter::{Node, Parser as TSParser, Tree};

use crate::errors::{LintError, Result};
use crate::features::parsing::domain::{ParseError, SyntaxNode, SyntaxTree};
use crate::features::parsing::ports::Parser;
use crate::shared::models::{NodeId, SyntaxKind};
use crate::shared::utils::tree_sitter::{
    self as ts, extract_node_text, find_child_by_kind, java_type_name, named_children, node_to_span,
};

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Java,
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::java()
    }
}

impl TreeSitterParser {
    /// Create a Java parser
    pub fn java() -> Self {
        Self {
            language: TreeSitterLanguage::Java,
        }
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Java => tree_sitter_java::language(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> SyntaxTree {
        let root_node = tree.root_node();

        let mut builder = JavaTreeBuilder {
            source,
            tree: SyntaxTree::new(source, file_path),
        };
        let root = NodeId(0);
        builder.tree.node_mut(root).span = node_to_span(&root_node);
        builder.convert_children(&root_node, root);

        let mut errors = Vec::new();
        self.collect_errors(&root_node, &mut errors);

        builder.tree.with_errors(errors)
    }

    /// Collect parse errors
    fn collect_errors(&self, node: &Node, errors: &mut Vec<ParseError>) {
        if node.is_error() || node.is_missing() {
            errors.push(ParseError {
                message: format!("Parse error at {:?}", node.kind()),
                span: node_to_span(node),
            });
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.collect_errors(&child, errors);
            }
        }
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<SyntaxTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| LintError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| LintError::parse(format!("Failed to parse {}", file_path)))?;

        Ok(self.convert_tree(&tree, source, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::Java => ext == "java",
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Java => "java",
        }
    }
}

/// CST → arena conversion state for one file
struct JavaTreeBuilder<'s> {
    source: &'s str,
    tree: SyntaxTree,
}

impl JavaTreeBuilder<'_> {
    fn text(&self, node: &Node) -> String {
        extract_node_text(node, self.source).to_string()
    }

    fn field_text(&self, node: &Node, field: &str) -> Option<String> {
        ts::field_text(node, field, self.source)
    }

    fn push(&mut self, parent: NodeId, kind: SyntaxKind, node: &Node) -> NodeId {
        let syntax = SyntaxNode::new(kind, node_to_span(node))
            .with_byte_range(node.byte_range())
            .with_raw_kind(node.kind());
        self.tree.push(parent, syntax)
    }

    fn push_named(&mut self, parent: NodeId, kind: SyntaxKind, node: &Node, name: Option<String>) -> NodeId {
        let id = self.push(parent, kind, node);
        self.tree.node_mut(id).name = name;
        id
    }

    fn convert_children(&mut self, node: &Node, parent: NodeId) {
        for child in named_children(node) {
            self.convert(&child, parent);
        }
    }

    fn convert(&mut self, node: &Node, parent: NodeId) {
        if node.is_extra() {
            return;
        }

        match node.kind() {
            "package_declaration" => {
                let name = named_children(node)
                    .into_iter()
                    .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"))
                    .map(|child| self.text(&child));
                self.push_named(parent, SyntaxKind::PackageDecl, node, name);
            }
            "import_declaration" => self.convert_import(node, parent),
            "class_declaration"
            | "interface_declaration"
            | "enum_declaration"
            | "record_declaration"
            | "annotation_type_declaration" => self.convert_type_declaration(node, parent),
            "method_declaration" | "constructor_declaration" | "compact_constructor_declaration" => {
                self.convert_method(node, parent)
            }
            "lambda_expression" => self.convert_lambda(node, parent),
            "field_declaration" => self.convert_variables(node, parent, SyntaxKind::FieldDecl),
            "local_variable_declaration" => self.convert_variables(node, parent, SyntaxKind::VariableDecl),
            "method_invocation" => self.convert_call(node, parent),
            "object_creation_expression" => self.convert_new(node, parent),
            "try_statement" | "try_with_resources_statement" => self.convert_try(node, parent),
            "identifier" => {
                let name = Some(self.text(node));
                self.push_named(parent, SyntaxKind::Identifier, node, name);
            }
            "this" => {
                self.push(parent, SyntaxKind::This, node);
            }
            "super" => {
                self.push(parent, SyntaxKind::Super, node);
            }
            "field_access" => {
                let name = self.field_text(node, "field");
                let id = self.push_named(parent, SyntaxKind::FieldAccess, node, name);
                if let Some(object) = node.child_by_field_name("object") {
                    self.convert(&object, id);
                }
            }
            "block" | "constructor_body" => {
                let id = self.push(parent, SyntaxKind::Block, node);
                self.convert_children(node, id);
            }
            other => {
                let id = self.push(parent, SyntaxKind::Other(other.to_string()), node);
                self.convert_children(node, id);
            }
        }
    }

    /// `import a.b.C;` → name `a.b.C`; `import a.b.*;` → name `a.b.*`.
    /// Static imports name members, not types, and are dropped.
    fn convert_import(&mut self, node: &Node, parent: NodeId) {
        let children = named_children(node);
        if find_child_by_kind(node, "static").is_some() {
            return;
        }
        let Some(path) = children
            .iter()
            .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"))
        else {
            return;
        };

        let mut name = self.text(path);
        if find_child_by_kind(node, "asterisk").is_some() {
            name.push_str(".*");
        }
        self.push_named(parent, SyntaxKind::ImportDecl, node, Some(name));
    }

    fn convert_type_declaration(&mut self, node: &Node, parent: NodeId) {
        let name = self.field_text(node, "name");
        let class = self.push_named(parent, SyntaxKind::ClassDef, node, name);

        for child in named_children(node) {
            match child.kind() {
                "superclass" => {
                    for ty in named_children(&child) {
                        self.push_supertype(class, &ty);
                    }
                }
                "super_interfaces" | "extends_interfaces" => {
                    if let Some(list) = find_child_by_kind(&child, "type_list") {
                        for ty in named_children(&list) {
                            self.push_supertype(class, &ty);
                        }
                    }
                }
                _ => {}
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.convert_children(&body, class);
        }
    }

    fn push_supertype(&mut self, class: NodeId, ty: &Node) {
        let name = java_type_name(ty, self.source);
        if !name.is_empty() {
            self.push_named(class, SyntaxKind::Supertype, ty, Some(name));
        }
    }

    fn convert_method(&mut self, node: &Node, parent: NodeId) {
        let name = self.field_text(node, "name");
        let method = self.push_named(parent, SyntaxKind::MethodDef, node, name);

        if let Some(params) = node.child_by_field_name("parameters") {
            self.convert_parameters(&params, method);
        }
        if let Some(body) = node.child_by_field_name("body") {
            self.convert(&body, method);
        }
    }

    fn convert_parameters(&mut self, params: &Node, owner: NodeId) {
        for param in named_children(params) {
            match param.kind() {
                "formal_parameter" => {
                    let ty = param
                        .child_by_field_name("type")
                        .map(|ty| java_type_name(&ty, self.source));
                    let name = self.field_text(&param, "name");
                    self.push_parameter(owner, &param, name, ty);
                }
                "spread_parameter" => {
                    let ty = named_children(&param)
                        .into_iter()
                        .find(|child| !matches!(child.kind(), "modifiers" | "variable_declarator"))
                        .map(|ty| java_type_name(&ty, self.source));
                    let name = find_child_by_kind(&param, "variable_declarator")
                        .and_then(|declarator| self.field_text(&declarator, "name"));
                    self.push_parameter(owner, &param, name, ty);
                }
                "identifier" => {
                    let name = Some(self.text(&param));
                    self.push_parameter(owner, &param, name, None);
                }
                _ => {}
            }
        }
    }

    fn push_parameter(&mut self, owner: NodeId, node: &Node, name: Option<String>, ty: Option<String>) {
        let id = self.push_named(owner, SyntaxKind::ParameterDecl, node, name);
        self.tree.node_mut(id).declared_type = ty;
    }

    fn convert_lambda(&mut self, node: &Node, parent: NodeId) {
        let lambda = self.push(parent, SyntaxKind::LambdaDef, node);

        if let Some(params) = node.child_by_field_name("parameters") {
            match params.kind() {
                "identifier" => {
                    let name = Some(self.text(&params));
                    self.push_parameter(lambda, &params, name, None);
                }
                _ => self.convert_parameters(&params, lambda),
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            self.convert(&body, lambda);
        }
    }

    fn convert_variables(&mut self, node: &Node, parent: NodeId, kind: SyntaxKind) {
        let decl = self.push(parent, kind, node);
        self.tree.node_mut(decl).declared_type = node
            .child_by_field_name("type")
            .map(|ty| java_type_name(&ty, self.source));

        for child in named_children(node) {
            if child.kind() != "variable_declarator" {
                continue;
            }
            let name = self.field_text(&child, "name");
            let declarator = self.push_named(decl, SyntaxKind::Declarator, &child, name);
            if let Some(value) = child.child_by_field_name("value") {
                self.convert(&value, declarator);
            }
        }
    }

    /// Calls are anchored at the method name, like lint locations
    fn convert_call(&mut self, node: &Node, parent: NodeId) {
        let name_node = node.child_by_field_name("name");
        let name = name_node.map(|n| self.text(&n));
        let call = self.push_named(parent, SyntaxKind::CallExpr, node, name);
        if let Some(name_node) = name_node {
            self.tree.node_mut(call).span = node_to_span(&name_node);
        }

        if let Some(object) = node.child_by_field_name("object") {
            self.convert(&object, call);
        }
        self.convert_arguments(node, call);
    }

    fn convert_arguments(&mut self, node: &Node, owner: NodeId) {
        if let Some(arguments) = node.child_by_field_name("arguments") {
            let list = self.push(owner, SyntaxKind::ArgumentList, &arguments);
            self.convert_children(&arguments, list);
        }
    }

    fn convert_new(&mut self, node: &Node, parent: NodeId) {
        let type_name = node
            .child_by_field_name("type")
            .map(|ty| java_type_name(&ty, self.source));
        let new_expr = self.push_named(parent, SyntaxKind::NewExpr, node, type_name.clone());
        self.convert_arguments(node, new_expr);

        if let Some(body) = find_child_by_kind(node, "class_body") {
            let anonymous = self.push_named(new_expr, SyntaxKind::AnonymousClass, &body, type_name);
            self.convert_children(&body, anonymous);
        }
    }

    fn convert_try(&mut self, node: &Node, parent: NodeId) {
        let stmt = self.push(parent, SyntaxKind::TryStmt, node);

        for child in named_children(node) {
            match child.kind() {
                "resource_specification" => self.convert_resources(&child, stmt),
                "catch_clause" => self.convert_catch(&child, stmt),
                "finally_clause" => {
                    let finally = self.push(stmt, SyntaxKind::FinallyClause, &child);
                    self.convert_children(&child, finally);
                }
                _ => self.convert(&child, stmt),
            }
        }
    }

    fn convert_resources(&mut self, node: &Node, stmt: NodeId) {
        let resources = self.push(stmt, SyntaxKind::TryResources, node);

        for resource in named_children(node) {
            let Some(ty) = resource.child_by_field_name("type") else {
                self.convert(&resource, resources);
                continue;
            };
            let decl = self.push(resources, SyntaxKind::VariableDecl, &resource);
            self.tree.node_mut(decl).declared_type = Some(java_type_name(&ty, self.source));

            let name = self.field_text(&resource, "name");
            let declarator = self.push_named(decl, SyntaxKind::Declarator, &resource, name);
            if let Some(value) = resource.child_by_field_name("value") {
                self.convert(&value, declarator);
            }
        }
    }

    /// One `CatchType` per multi-catch alternative, directly under the clause
    fn convert_catch(&mut self, node: &Node, stmt: NodeId) {
        let clause = self.push(stmt, SyntaxKind::CatchClause, node);

        if let Some(param) = find_child_by_kind(node, "catch_formal_parameter") {
            let mut alternatives = Vec::new();
            if let Some(catch_type) = find_child_by_kind(&param, "catch_type") {
                for ty in named_children(&catch_type) {
                    let name = java_type_name(&ty, self.source);
                    self.push_named(clause, SyntaxKind::CatchType, &ty, Some(name.clone()));
                    alternatives.push(name);
                }
            }

            let name = self.field_text(&param, "name");
            let declared = if alternatives.len() == 1 {
                alternatives.pop()
            } else {
                None
            };
            self.push_parameter(clause, &param, name, declared);
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.convert(&body, clause);
        }
    }
}
