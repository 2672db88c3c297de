//! Common test utilities for lifecycle-lint
//!
//! Shared fixtures, assertions, and builders for the integration and unit
//! test targets. Not every target uses every helper.

#![allow(dead_code)]

mod assertions;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
