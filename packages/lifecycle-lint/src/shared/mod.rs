//! Shared module - Common types and utilities
//!
//! Types shared by the host front end and the lifecycle analyzer.

pub mod models;
pub mod ports;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use ports::TreeWalker;
