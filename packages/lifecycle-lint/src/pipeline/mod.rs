//! Pipeline orchestration
//!
//! - `unit`: one source text → `UnitReport`
//! - `batch`: files under paths → `BatchReport` (rayon when enabled)
//! - `report`: text / JSON rendering

pub mod batch;
pub mod report;
pub mod unit;

#[cfg(feature = "parallel")]
pub use batch::init_thread_pool;
pub use batch::{collect_source_files, lint_file, lint_paths, BatchReport, FileFailure};
pub use report::{render, render_issue_list, render_json, render_text, ReportFormat};
pub use unit::{lint_source, Linter, UnitReport};
