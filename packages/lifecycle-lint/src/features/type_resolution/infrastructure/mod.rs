//! Type resolution infrastructure
//!
//! - `platform_hierarchy`: shared platform type table with memoized ancestry
//! - `java_type_resolver`: per-unit `TypeResolver` over a parsed Java tree

pub mod java_type_resolver;
pub mod platform_hierarchy;

pub use java_type_resolver::JavaTypeResolver;
pub use platform_hierarchy::PlatformHierarchy;
