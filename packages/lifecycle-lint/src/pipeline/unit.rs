//! Single-unit pipeline
//!
//! parse → resolve types → feed applicable call sites → sorted diagnostics

use crate::config::LintConfig;
use crate::errors::Result;
use crate::features::lifecycle::{CallSite, Diagnostic, LifecycleAnalyzer};
use crate::features::parsing::{Parser, SyntaxTree, TreeSitterParser};
use crate::features::type_resolution::{JavaTypeResolver, PlatformHierarchy};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

/// Everything needed to lint units; shared across worker threads
pub struct Linter {
    config: LintConfig,
    analyzer: LifecycleAnalyzer,
    platform: Arc<PlatformHierarchy>,
    parser: Box<dyn Parser>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer)
            .field("language", &self.parser.language_name())
            .finish()
    }
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        let platform = if config.platform.is_empty() {
            PlatformHierarchy::shared()
        } else {
            Arc::new(PlatformHierarchy::with_extra_edges(&config.platform))
        };

        Self {
            analyzer: LifecycleAnalyzer::with_kinds(config.enabled_kinds()),
            platform,
            parser: Box::new(TreeSitterParser::java()),
            config,
        }
    }

    /// Replace the source parser
    pub fn with_parser(mut self, parser: Box<dyn Parser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &LifecycleAnalyzer {
        &self.analyzer
    }

    pub fn platform(&self) -> &PlatformHierarchy {
        &self.platform
    }

    pub fn supports_extension(&self, ext: &str) -> bool {
        self.parser.supports_extension(ext)
    }

    /// Lint an already parsed unit
    pub fn lint_tree(&self, tree: &SyntaxTree) -> Vec<Diagnostic> {
        let resolver = JavaTypeResolver::new(tree, &self.platform);

        let calls: Vec<CallSite> = tree
            .call_sites()
            .into_iter()
            .filter(|call| self.analyzer.is_applicable(&call.method_name))
            .collect();
        trace!(file = %tree.file_path, calls = calls.len(), "Applicable call sites");

        let mut diagnostics = self.analyzer.analyze_unit(tree, &resolver, &calls);
        diagnostics.sort_by_key(|d| (d.span, d.node));
        diagnostics
    }
}

/// Diagnostics of one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    pub path: String,
    pub diagnostics: Vec<Diagnostic>,

    /// Recoverable syntax errors seen while parsing
    pub parse_errors: usize,
}

impl UnitReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Lint one source text
pub fn lint_source(source: &str, path: &str, linter: &Linter) -> Result<UnitReport> {
    let tree = linter.parser.parse(source, path)?;
    if tree.has_errors() {
        debug!(file = path, errors = tree.errors.len(), "Linting unit with syntax errors");
    }

    Ok(UnitReport {
        path: path.to_string(),
        diagnostics: linter.lint_tree(&tree),
        parse_errors: tree.errors.len(),
    })
}
