/*
 * Guard Detector
 *
 * A release is "guarded" when it sits in the protected region of a try
 * statement whose catch clause accepts one of the API's guard exceptions.
 *
 * # Algorithm
 * Walk outward from the call, yielding each enclosing try statement entered
 * through its body or resource specification (catch and finally blocks are
 * not protected). Stop at the first qualifying catch clause, or at the
 * nearest callable/type declaration: code inside a lambda or a local class
 * does not run inside the outer try.
 */

use crate::features::lifecycle::domain::ResourceApi;
use crate::features::lifecycle::ports::{TreeWalker, TypeResolver};
use crate::shared::models::{NodeId, SyntaxKind};
use crate::shared::utils::ancestors::{ancestor_steps, AncestorSteps};
use tracing::trace;

/// Lazy sequence of try statements whose protected region contains a node
pub struct EnclosingTries<'t, W: TreeWalker + ?Sized> {
    tree: &'t W,
    steps: AncestorSteps<'t, W>,
    bounded: bool,
}

impl<'t, W: TreeWalker + ?Sized> Iterator for EnclosingTries<'t, W> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bounded {
            return None;
        }

        for step in self.steps.by_ref() {
            let kind = self.tree.kind(step.ancestor);

            if kind.is_callable() || kind.is_type_declaration() {
                self.bounded = true;
                return None;
            }

            if *kind == SyntaxKind::TryStmt && is_protected_region(self.tree.kind(step.child)) {
                return Some(step.ancestor);
            }
        }

        None
    }
}

fn is_protected_region(kind: &SyntaxKind) -> bool {
    !matches!(kind, SyntaxKind::CatchClause | SyntaxKind::FinallyClause)
}

/// Enclosing try statements protecting `node`, innermost first
pub fn enclosing_tries<W: TreeWalker + ?Sized>(tree: &W, node: NodeId) -> EnclosingTries<'_, W> {
    EnclosingTries {
        tree,
        steps: ancestor_steps(tree, node),
        bounded: false,
    }
}

/// Catch-type nodes of every catch clause of `try_stmt`
/// (multi-catch alternatives included)
pub fn catch_types<W: TreeWalker + ?Sized>(tree: &W, try_stmt: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    tree.children(try_stmt)
        .iter()
        .copied()
        .filter(move |&child| *tree.kind(child) == SyntaxKind::CatchClause)
        .flat_map(move |clause| {
            tree.children(clause)
                .iter()
                .copied()
                .filter(move |&child| *tree.kind(child) == SyntaxKind::CatchType)
        })
}

/// `node` is protected by a catch of one of `api`'s guard exceptions
pub fn is_guarded<W, R>(tree: &W, resolver: &R, node: NodeId, api: &ResourceApi) -> bool
where
    W: TreeWalker + ?Sized,
    R: TypeResolver + ?Sized,
{
    if api.guard_exceptions.is_empty() {
        return false;
    }

    enclosing_tries(tree, node).any(|try_stmt| {
        let guarded = catch_types(tree, try_stmt)
            .filter_map(|catch_type| resolver.type_of(catch_type))
            .any(|ty| api.is_guard_exception(&ty.qualified_name));
        trace!("try {} guards {}: {}", try_stmt, node, guarded);
        guarded
    })
}
