//! Batch linting
//!
//! Collects source files under the given paths with `walkdir` and lints
//! each one as an independent unit, on the rayon pool when enabled.

use super::unit::{lint_source, Linter, UnitReport};
use crate::errors::{LintError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A file that could not be linted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

/// Reports of a whole run, in path order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub units: Vec<UnitReport>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    pub fn files_linted(&self) -> usize {
        self.units.len()
    }

    pub fn diagnostic_count(&self) -> usize {
        self.units.iter().map(|unit| unit.diagnostics.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.units
            .iter()
            .flat_map(|unit| &unit.diagnostics)
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostic_count() - self.error_count()
    }

    /// No diagnostics and no failures
    pub fn is_clean(&self) -> bool {
        self.diagnostic_count() == 0 && self.failures.is_empty()
    }
}

/// Size the global rayon pool to 75% of the available cores
///
/// Only the first call has an effect.
#[cfg(feature = "parallel")]
pub fn init_thread_pool() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let cpus = num_cpus::get();
        let threads = std::cmp::max(1, (cpus * 3) / 4);

        match rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            Ok(()) => info!("Rayon pool: {} threads (75% of {})", threads, cpus),
            Err(e) => tracing::debug!("Rayon pool already initialized: {}", e),
        }
    });
}

/// Source files under `paths`, sorted and deduplicated
///
/// Explicit file arguments are kept whatever their extension; directories
/// are walked for files the linter's parser supports.
pub fn collect_source_files<P: AsRef<Path>>(paths: &[P], linter: &Linter) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }

        for entry in WalkDir::new(path).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", path.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let supported = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| linter.supports_extension(ext));
            if supported {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

/// Read and lint one file
pub fn lint_file(path: &Path, linter: &Linter) -> Result<UnitReport> {
    let source = std::fs::read_to_string(path).map_err(|e| LintError::read(path, e))?;
    lint_source(&source, &path.to_string_lossy(), linter)
}

/// Lint every source file under `paths`
pub fn lint_paths<P: AsRef<Path>>(paths: &[P], linter: &Linter) -> BatchReport {
    let start = Instant::now();
    let files = collect_source_files(paths, linter);
    let parallel = linter.config().parallel;
    info!(files = files.len(), parallel, "Linting batch");

    let results = map_files(&files, parallel, |path| (path, lint_file(path, linter)));

    let mut report = BatchReport::default();
    for (path, result) in results {
        match result {
            Ok(unit) => report.units.push(unit),
            Err(e) => {
                warn!("Failed to lint {}: {}", path.display(), e);
                report.failures.push(FileFailure {
                    path: path.to_string_lossy().into_owned(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        files = report.files_linted(),
        failures = report.failures.len(),
        diagnostics = report.diagnostic_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Batch finished"
    );
    report
}

#[cfg(feature = "parallel")]
fn map_files<'f, T, F>(files: &'f [PathBuf], parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&'f PathBuf) -> T + Sync + Send,
{
    if parallel {
        files.par_iter().map(f).collect()
    } else {
        files.iter().map(f).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_files<'f, T, F>(files: &'f [PathBuf], _parallel: bool, f: F) -> Vec<T>
where
    F: Fn(&'f PathBuf) -> T,
{
    files.iter().map(f).collect()
}
