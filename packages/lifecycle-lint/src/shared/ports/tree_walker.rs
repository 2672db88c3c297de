//! Tree navigation port
//!
//! Read-only view of one unit's syntax tree. The parent relation is a
//! navigation back-reference (an index), not ownership.

use crate::shared::models::{NodeId, SyntaxKind};

/// Navigation over a unit's syntax tree
pub trait TreeWalker {
    /// Root of the unit
    fn root(&self) -> NodeId;

    /// Parent of `node`, `None` at the root
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Children of `node` in source order
    fn children(&self, node: NodeId) -> &[NodeId];

    /// Kind of `node`
    fn kind(&self, node: NodeId) -> &SyntaxKind;

    /// Declared or referenced name carried by `node`
    ///
    /// Method/class declarations carry their simple name, calls their method
    /// name, type references their (unqualified) type text.
    fn name(&self, node: NodeId) -> Option<&str>;
}
