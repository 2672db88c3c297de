//! Shared ports

mod tree_walker;

pub use tree_walker::TreeWalker;
