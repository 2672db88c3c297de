//! Ancestor traversal
//!
//! "Walk to the nearest ancestor satisfying P" over any `TreeWalker`.
//! Used for enclosing-method lookup, enclosing-type lookup and the
//! outward scan over exception-handling constructs.

use crate::shared::models::NodeId;
use crate::shared::ports::TreeWalker;

/// One step of an upward walk: `ancestor` was reached through `child`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorStep {
    pub child: NodeId,
    pub ancestor: NodeId,
}

/// Lazy iterator over the parent chain, innermost first
pub struct AncestorSteps<'t, W: TreeWalker + ?Sized> {
    walker: &'t W,
    current: NodeId,
}

impl<'t, W: TreeWalker + ?Sized> Iterator for AncestorSteps<'t, W> {
    type Item = AncestorStep;

    fn next(&mut self) -> Option<Self::Item> {
        let parent = self.walker.parent(self.current)?;
        let step = AncestorStep {
            child: self.current,
            ancestor: parent,
        };
        self.current = parent;
        Some(step)
    }
}

/// Parent chain of `node` with the child each ancestor was entered from
pub fn ancestor_steps<W: TreeWalker + ?Sized>(walker: &W, node: NodeId) -> AncestorSteps<'_, W> {
    AncestorSteps {
        walker,
        current: node,
    }
}

/// Parent chain of `node` (excluding `node` itself)
pub fn ancestors<W: TreeWalker + ?Sized>(
    walker: &W,
    node: NodeId,
) -> impl Iterator<Item = NodeId> + '_ {
    ancestor_steps(walker, node).map(|step| step.ancestor)
}

/// Nearest strict ancestor of `node` satisfying `predicate`
pub fn nearest_ancestor<W, P>(walker: &W, node: NodeId, mut predicate: P) -> Option<NodeId>
where
    W: TreeWalker + ?Sized,
    P: FnMut(NodeId) -> bool,
{
    ancestors(walker, node).find(|&id| predicate(id))
}
