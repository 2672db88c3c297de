/*
 * Caller Context Resolver
 *
 * Finds the method lexically enclosing a call site and classifies the type
 * that owns it (activity-like, fragment-like, other, unresolved).
 *
 * Lambdas are walked through: a callback registered in onCreate() still
 * "belongs" to onCreate(). Anonymous class methods are their own methods,
 * owned by the anonymous type.
 */

use crate::features::lifecycle::domain::{CallerContext, ComponentKind};
use crate::features::lifecycle::infrastructure::built_in::{ACTIVITY_TYPES, FRAGMENT_TYPES};
use crate::features::lifecycle::ports::{TreeWalker, TypeResolver};
use crate::shared::models::{NodeId, SyntaxKind};
use crate::shared::utils::nearest_ancestor;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Nearest enclosing method (or constructor) declaration of `node`
pub fn enclosing_method<W>(tree: &W, node: NodeId) -> Option<NodeId>
where
    W: TreeWalker + ?Sized,
{
    nearest_ancestor(tree, node, |id| *tree.kind(id) == SyntaxKind::MethodDef)
}

/// Nearest type declaration (named or anonymous class) enclosing `node`
pub fn enclosing_type<W>(tree: &W, node: NodeId) -> Option<NodeId>
where
    W: TreeWalker + ?Sized,
{
    nearest_ancestor(tree, node, |id| tree.kind(id).is_type_declaration())
}

/// Classify the type owning `method`
pub fn classify_method<W, R>(tree: &W, resolver: &R, method: NodeId) -> CallerContext
where
    W: TreeWalker + ?Sized,
    R: TypeResolver + ?Sized,
{
    let method_name = tree.name(method).unwrap_or_default();

    let Some(owner) = enclosing_type(tree, method).and_then(|decl| resolver.type_of(decl)) else {
        return CallerContext::new(ComponentKind::Unresolved, method_name);
    };

    let component = if ACTIVITY_TYPES
        .iter()
        .any(|base| resolver.is_subtype_of(&owner, base))
    {
        ComponentKind::Activity
    } else if FRAGMENT_TYPES
        .iter()
        .any(|base| resolver.is_subtype_of(&owner, base))
    {
        ComponentKind::Fragment
    } else {
        ComponentKind::Other
    };

    CallerContext::new(component, method_name)
}

/// Per-unit caller context lookup, memoized by enclosing method
#[derive(Debug, Default)]
pub struct CallerContextResolver {
    memo: FxHashMap<NodeId, CallerContext>,
}

impl CallerContextResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caller context of the call at `call_node`
    pub fn context_of<W, R>(&mut self, tree: &W, resolver: &R, call_node: NodeId) -> CallerContext
    where
        W: TreeWalker + ?Sized,
        R: TypeResolver + ?Sized,
    {
        let Some(method) = enclosing_method(tree, call_node) else {
            return CallerContext::unresolved();
        };

        if let Some(cached) = self.memo.get(&method) {
            trace!("caller context memo hit for {}", method);
            return cached.clone();
        }

        let context = classify_method(tree, resolver, method);
        self.memo.insert(method, context.clone());
        context
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    pub fn clear(&mut self) {
        self.memo.clear();
    }
}
