//! Java Type Resolver
//!
//! Answers the analyzer's type questions for one parsed compilation unit.
//!
//! Names are qualified, in order, through:
//! 1. single-type imports
//! 2. classes declared in the unit (nested ones as `Outer.Inner`)
//! 3. `java.lang` and wildcard imports known to the platform table
//! 4. the platform table's simple names
//! 5. the unit's package
//!
//! Ancestry walks the unit's own `extends`/`implements` edges first and
//! falls back to the shared platform table.

use crate::features::lifecycle::domain::CallSite;
use crate::features::lifecycle::infrastructure::built_in::CONTEXT;
use crate::features::lifecycle::ports::TypeResolver;
use crate::features::parsing::domain::SyntaxTree;
use crate::features::type_resolution::infrastructure::platform_hierarchy::PlatformHierarchy;
use crate::shared::models::{NodeId, SyntaxKind, TypeRef};
use crate::shared::ports::TreeWalker;
use crate::shared::utils::{ancestors, nearest_ancestor};
use rustc_hash::{FxHashMap, FxHashSet};

/// Accessors whose result type is known without a signature
const TYPED_ACCESSORS: &[(&str, &str)] = &[
    ("getApplicationContext", CONTEXT),
    ("getBaseContext", CONTEXT),
    ("getContext", CONTEXT),
    ("requireContext", CONTEXT),
    ("getActivity", "android.app.Activity"),
    ("requireActivity", "android.app.Activity"),
];

/// Singleton accessor: `T.getInstance(..)` has type `T`
const SINGLETON_ACCESSOR: &str = "getInstance";

/// `TypeResolver` over one Java `SyntaxTree`
pub struct JavaTypeResolver<'t> {
    tree: &'t SyntaxTree,
    platform: &'t PlatformHierarchy,

    package: Option<String>,

    /// Simple name -> qualified name
    imports: FxHashMap<String, String>,

    /// Packages imported with `.*`
    wildcard_imports: Vec<String>,

    /// ClassDef node -> qualified name
    classes: FxHashMap<NodeId, String>,

    /// Simple or package-relative name -> qualified name
    class_names: FxHashMap<String, String>,

    /// Unit class -> qualified direct supertypes
    local_supertypes: FxHashMap<String, Vec<String>>,
}

impl<'t> JavaTypeResolver<'t> {
    pub fn new(tree: &'t SyntaxTree, platform: &'t PlatformHierarchy) -> Self {
        let mut resolver = Self {
            tree,
            platform,
            package: None,
            imports: FxHashMap::default(),
            wildcard_imports: Vec::new(),
            classes: FxHashMap::default(),
            class_names: FxHashMap::default(),
            local_supertypes: FxHashMap::default(),
        };
        resolver.index_declarations();
        resolver.index_supertypes();
        resolver
    }

    fn index_declarations(&mut self) {
        let tree = self.tree;
        for id in tree.descendants(tree.root()) {
            match tree.kind(id) {
                SyntaxKind::PackageDecl => {
                    self.package = tree.name(id).map(str::to_string);
                }
                SyntaxKind::ImportDecl => {
                    let Some(path) = tree.name(id) else { continue };
                    if let Some(package) = path.strip_suffix(".*") {
                        self.wildcard_imports.push(package.to_string());
                    } else if let Some((_, simple)) = path.rsplit_once('.') {
                        self.imports.insert(simple.to_string(), path.to_string());
                    }
                }
                SyntaxKind::ClassDef => {
                    let Some(name) = tree.name(id) else { continue };
                    // Preorder: an enclosing class is always indexed first
                    let outer = nearest_ancestor(tree, id, |a| *tree.kind(a) == SyntaxKind::ClassDef)
                        .and_then(|outer| self.classes.get(&outer));
                    let qualified = match (outer, &self.package) {
                        (Some(outer), _) => format!("{outer}.{name}"),
                        (None, Some(package)) => format!("{package}.{name}"),
                        (None, None) => name.to_string(),
                    };

                    let relative = match &self.package {
                        Some(package) => qualified
                            .strip_prefix(package.as_str())
                            .and_then(|rest| rest.strip_prefix('.'))
                            .unwrap_or(&qualified)
                            .to_string(),
                        None => qualified.clone(),
                    };
                    self.class_names
                        .entry(name.to_string())
                        .or_insert_with(|| qualified.clone());
                    self.class_names.entry(relative).or_insert_with(|| qualified.clone());
                    self.classes.insert(id, qualified);
                }
                _ => {}
            }
        }
    }

    fn index_supertypes(&mut self) {
        let tree = self.tree;
        let mut edges: FxHashMap<String, Vec<String>> = FxHashMap::default();

        for (&class, qualified) in &self.classes {
            let supers = tree
                .children(class)
                .iter()
                .filter(|&&child| *tree.kind(child) == SyntaxKind::Supertype)
                .filter_map(|&child| tree.name(child))
                .filter_map(|name| self.qualify(name))
                .collect();
            edges.insert(qualified.clone(), supers);
        }
        self.local_supertypes = edges;
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Qualified name of every class declared in the unit
    pub fn declared_classes(&self) -> impl Iterator<Item = &str> {
        self.classes.values().map(String::as_str)
    }

    /// Qualify a type name as written in source
    pub fn qualify(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() || name == "var" {
            return None;
        }

        if let Some((head, rest)) = name.split_once('.') {
            // `Outer.Inner` or an already qualified name
            if let Some(outer) = self.qualify_simple(head) {
                return Some(format!("{outer}.{rest}"));
            }
            if let Some(local) = self.class_names.get(name) {
                return Some(local.clone());
            }
            return Some(name.to_string());
        }

        self.qualify_simple(name).or_else(|| {
            Some(match &self.package {
                Some(package) => format!("{package}.{name}"),
                None => name.to_string(),
            })
        })
    }

    fn qualify_simple(&self, simple: &str) -> Option<String> {
        if let Some(qualified) = self.imports.get(simple) {
            return Some(qualified.clone());
        }
        if let Some(qualified) = self.class_names.get(simple) {
            return Some(qualified.clone());
        }

        let implicit = std::iter::once("java.lang").chain(self.wildcard_imports.iter().map(String::as_str));
        for package in implicit {
            let candidate = format!("{package}.{simple}");
            if self.platform.contains(&candidate) {
                return Some(candidate);
            }
        }

        self.platform.qualify_simple(simple).map(str::to_string)
    }

    /// Qualified type of the nearest named class around `node`
    fn enclosing_class_type(&self, node: NodeId) -> Option<TypeRef> {
        let tree = self.tree;
        let class = nearest_ancestor(tree, node, |a| *tree.kind(a) == SyntaxKind::ClassDef)?;
        self.classes.get(&class).map(TypeRef::new)
    }

    /// Declaration of variable `name` visible from `from`
    ///
    /// Returns the node carrying the name: a `ParameterDecl` or a
    /// `Declarator`. Scopes are searched innermost first; declaration order
    /// within a scope is not checked.
    fn lookup_variable(&self, from: NodeId, name: &str) -> Option<NodeId> {
        let tree = self.tree;
        for scope in ancestors(tree, from) {
            for &child in tree.children(scope) {
                let found = match tree.kind(child) {
                    SyntaxKind::ParameterDecl if tree.name(child) == Some(name) => Some(child),
                    SyntaxKind::FieldDecl | SyntaxKind::VariableDecl => self.declarator_named(child, name),
                    SyntaxKind::TryResources => tree
                        .children(child)
                        .iter()
                        .find_map(|&decl| self.declarator_named(decl, name)),
                    _ => None,
                };
                if found.is_some() {
                    return found;
                }
            }
        }
        None
    }

    fn declarator_named(&self, decl: NodeId, name: &str) -> Option<NodeId> {
        let tree = self.tree;
        tree.children(decl).iter().copied().find(|&d| {
            *tree.kind(d) == SyntaxKind::Declarator && tree.name(d) == Some(name)
        })
    }

    /// Field `name` declared directly in `class`
    fn field_of(&self, class: NodeId, name: &str) -> Option<NodeId> {
        let tree = self.tree;
        tree.children(class)
            .iter()
            .filter(|&&child| *tree.kind(child) == SyntaxKind::FieldDecl)
            .find_map(|&field| self.declarator_named(field, name))
    }

    /// Expression text read as a type name (`LocalBroadcastManager`,
    /// `android.content.Context`)
    fn type_name(&self, text: &str) -> Option<TypeRef> {
        let last = text.rsplit('.').next()?;
        if !last.chars().next().is_some_and(char::is_uppercase) {
            return None;
        }
        self.qualify(text).map(TypeRef::new)
    }

    /// Static type of an expression, when it can be told from the unit
    fn expression_type(&self, expr: NodeId) -> Option<TypeRef> {
        let tree = self.tree;
        match tree.kind(expr) {
            SyntaxKind::This | SyntaxKind::Super => self.enclosing_class_type(expr),
            SyntaxKind::Identifier => {
                let name = tree.name(expr)?;
                match self.lookup_variable(expr, name) {
                    Some(decl) => self.type_of(decl),
                    None => self.type_name(name),
                }
            }
            SyntaxKind::FieldAccess => {
                let field = tree.name(expr)?;
                let object = tree.children(expr).first().copied()?;
                // `Outer.this`
                if field == "this" {
                    return self.qualify(tree.text(object)).map(TypeRef::new);
                }
                if *tree.kind(object) == SyntaxKind::This {
                    let class = nearest_ancestor(tree, expr, |a| *tree.kind(a) == SyntaxKind::ClassDef)?;
                    return self.field_of(class, field).and_then(|decl| self.type_of(decl));
                }
                self.type_name(tree.text(expr))
            }
            SyntaxKind::CallExpr => self.call_result_type(expr),
            SyntaxKind::NewExpr => self.type_of(expr),
            SyntaxKind::Other(kind) if kind == "parenthesized_expression" => {
                let inner = tree.children(expr).first().copied()?;
                self.expression_type(inner)
            }
            SyntaxKind::Other(kind) if kind == "cast_expression" => {
                let ty = tree.children(expr).first().copied()?;
                let text = tree.text(ty);
                let base = text.split('<').next().unwrap_or(text);
                self.qualify(base).map(TypeRef::new)
            }
            _ => None,
        }
    }

    fn call_result_type(&self, call: NodeId) -> Option<TypeRef> {
        let tree = self.tree;
        let name = tree.name(call)?;

        if let Some((_, ty)) = TYPED_ACCESSORS.iter().find(|(accessor, _)| *accessor == name) {
            return Some(TypeRef::new(*ty));
        }
        if name == SINGLETON_ACCESSOR {
            let receiver = tree.call_site(call)?.receiver?;
            return self.expression_type(receiver);
        }
        None
    }

    /// Declared type of a field/variable/parameter declaration
    fn declared_type_of(&self, decl: NodeId) -> Option<TypeRef> {
        let declared = self.tree.declared_type(decl)?;
        self.qualify(declared).map(TypeRef::new)
    }
}

impl TypeResolver for JavaTypeResolver<'_> {
    fn owning_type(&self, call: &CallSite) -> Option<TypeRef> {
        match call.receiver {
            Some(receiver) => self.expression_type(receiver),
            None => self.enclosing_class_type(call.node),
        }
    }

    fn type_of(&self, node: NodeId) -> Option<TypeRef> {
        let tree = self.tree;
        match tree.kind(node) {
            SyntaxKind::ClassDef => self.classes.get(&node).map(TypeRef::new),
            SyntaxKind::AnonymousClass
            | SyntaxKind::NewExpr
            | SyntaxKind::CatchType
            | SyntaxKind::Supertype => tree.name(node).and_then(|name| self.qualify(name)).map(TypeRef::new),
            SyntaxKind::FieldDecl | SyntaxKind::VariableDecl | SyntaxKind::ParameterDecl => {
                self.declared_type_of(node)
            }
            SyntaxKind::Declarator => {
                let decl = tree.parent(node)?;
                // `var x = new T()` takes the initializer's type
                self.declared_type_of(decl).or_else(|| {
                    let init = tree.children(node).first().copied()?;
                    self.expression_type(init)
                })
            }
            SyntaxKind::This => self.enclosing_class_type(node),
            _ => None,
        }
    }

    fn is_subtype_of(&self, ty: &TypeRef, ancestor: &str) -> bool {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut stack: Vec<&str> = vec![ty.qualified_name.as_str()];

        while let Some(current) = stack.pop() {
            if current == ancestor {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(supers) = self.local_supertypes.get(current) {
                stack.extend(supers.iter().map(String::as_str));
            }
            if self.platform.is_subtype_of(current, ancestor) {
                return true;
            }
        }
        false
    }
}
