//! Utility modules shared across features
//!
//! - `ancestors`: upward walks over a `TreeWalker`
//! - `tree_sitter`: tree-sitter node helpers for the Java front end

pub mod ancestors;
pub mod tree_sitter;

pub use ancestors::{ancestor_steps, ancestors, nearest_ancestor, AncestorStep};
