/*
 * Lifecycle Ports
 *
 * Services the analyzer must be supplied with. Tree navigation is the shared
 * `TreeWalker`; type facts and diagnostic delivery live here.
 */

use crate::features::lifecycle::domain::{CallSite, Diagnostic};
use crate::shared::models::{NodeId, TypeRef};

pub use crate::shared::ports::TreeWalker;

/// Type facts for one unit
///
/// Every lookup may miss; a miss is a normal outcome, never an error.
pub trait TypeResolver {
    /// Declared type owning the method `call` invokes
    fn owning_type(&self, call: &CallSite) -> Option<TypeRef>;

    /// Type denoted by a declaration or type-reference node
    /// (class declarations, anonymous class bodies, catch types)
    fn type_of(&self, node: NodeId) -> Option<TypeRef>;

    /// `ty` is `ancestor` or a transitive subtype of it
    fn is_subtype_of(&self, ty: &TypeRef, ancestor: &str) -> bool;
}

/// Receiver of diagnostics; fire-and-forget
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
