//! Configuration
//!
//! Two ways in:
//! - `LintConfig::default()`: every rule on, built-in platform table only
//! - `LintConfig::from_yaml(path)`: versioned YAML schema (v1)
//!
//! ```rust,ignore
//! use lifecycle_lint::config::LintConfig;
//!
//! let config = LintConfig::from_yaml("lifecycle-lint.yaml")?;
//! for kind in config.enabled_kinds() { /* ... */ }
//! ```

pub mod error;
pub mod lint_config;

pub use error::{ConfigError, ConfigResult};
pub use lint_config::{LintConfig, LintConfigFileV1};
