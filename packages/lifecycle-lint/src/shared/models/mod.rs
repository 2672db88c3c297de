//! Shared models

mod span;
mod syntax;
mod type_ref;

pub use span::Span;
pub use syntax::{NodeId, SyntaxKind};
pub use type_ref::TypeRef;
