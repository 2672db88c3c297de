//! Type Resolution Feature
//!
//! Type facts for the lifecycle analyzer: qualified names for declarations
//! and receivers, and ancestry against the platform hierarchy.
//!
//! ## Structure
//! - `infrastructure/` - PlatformHierarchy (shared), JavaTypeResolver (per unit)
//!
//! The port itself is `lifecycle::ports::TypeResolver`; this feature only
//! provides the Java implementation.

pub mod infrastructure;

pub use infrastructure::{JavaTypeResolver, PlatformHierarchy};
