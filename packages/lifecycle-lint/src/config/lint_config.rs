//! Lint configuration and its YAML schema
//!
//! ```yaml
//! version: 1
//! rules:
//!   subscription: true
//!   connection: false
//! platform:
//!   com.example.BaseActivity: [android.app.Activity]
//! parallel: true
//! ```

use super::error::{ConfigError, ConfigResult};
use crate::features::lifecycle::domain::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Rule on/off switches, by resource kind
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, bool>,

    /// Extra type hierarchy edges: type -> direct supertypes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub platform: BTreeMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
}

/// Validated lint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    enabled: BTreeMap<ResourceKind, bool>,

    /// Extra type hierarchy edges merged into the platform table
    pub platform: BTreeMap<String, Vec<String>>,

    /// Lint files in parallel
    pub parallel: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled: ResourceKind::ALL.into_iter().map(|kind| (kind, true)).collect(),
            platform: BTreeMap::new(),
            parallel: true,
        }
    }
}

impl LintConfig {
    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: LintConfigFileV1 = serde_yaml::from_str(content)?;

        // Version check
        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::default();

        for (name, enabled) in file.rules {
            let kind = ResourceKind::from_name(&name).ok_or_else(|| {
                let valid: Vec<&str> = ResourceKind::ALL.iter().map(|k| k.as_str()).collect();
                ConfigError::unknown_rule(&name, &valid)
            })?;
            config.enabled.insert(kind, enabled);
        }

        config.platform = file.platform;
        if let Some(parallel) = file.parallel {
            config.parallel = parallel;
        }

        Ok(config)
    }

    /// Export as YAML schema v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = LintConfigFileV1 {
            version: Some(1),
            rules: self
                .enabled
                .iter()
                .map(|(kind, enabled)| (kind.as_str().to_string(), *enabled))
                .collect(),
            platform: self.platform.clone(),
            parallel: Some(self.parallel),
        };

        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn is_enabled(&self, kind: ResourceKind) -> bool {
        self.enabled.get(&kind).copied().unwrap_or(true)
    }

    /// Enabled resource kinds, in declaration order
    pub fn enabled_kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }

    pub fn with_rule(mut self, kind: ResourceKind, enabled: bool) -> Self {
        self.enabled.insert(kind, enabled);
        self
    }

    /// Declare `ty` as a direct subtype of `supertype`
    pub fn with_platform_edge(mut self, ty: impl Into<String>, supertype: impl Into<String>) -> Self {
        self.platform.entry(ty.into()).or_default().push(supertype.into());
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
