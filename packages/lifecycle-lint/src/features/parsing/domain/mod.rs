//! Parsing domain models

mod syntax_node;
mod syntax_tree;

pub use syntax_node::SyntaxNode;
pub use syntax_tree::{Descendants, ParseError, SyntaxTree, SyntaxTreeBuilder};
