//! Parsing Feature
//!
//! Turns Java source into the language-neutral syntax arena the lifecycle
//! analyzer walks.
//!
//! ## Structure
//! - `domain/` - SyntaxTree arena, SyntaxNode, SyntaxTreeBuilder
//! - `ports/` - Parser trait
//! - `infrastructure/` - TreeSitterParser (tree-sitter-java)

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{ParseError, SyntaxNode, SyntaxTree, SyntaxTreeBuilder};

// Re-export infrastructure (internal use - prefer the Parser port)
#[doc(hidden)]
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
