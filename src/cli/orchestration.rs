//! Main workflow orchestration logic
//!
//! Keeps the batch run separate from CLI argument parsing so it can be called
//! programmatically without depending on clap.

use std::path::Path;

use log::info;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{RunReport, TargetVersion};
use crate::error::Result;
use crate::rewrite::Rewriter;
use crate::scan::{find_documents, process_document};

/// Command-line flags for a run, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Report what would change without writing documents
    pub dry_run: bool,

    /// Print nothing to the console
    pub silent: bool,

    /// Also print the paths of changed documents
    pub verbose: bool,
}

/// Warnings that can be determined before any document is read.
pub fn preflight_warnings(target: &TargetVersion) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();
    if !target.is_recognized() {
        warnings.push(BoundaryWarning::UnrecognizedTargetVersion {
            version: target.to_string(),
        });
    }
    warnings
}

/// Warnings that depend on the finished run.
pub fn report_warnings(root: &Path, report: &RunReport, config: &Config) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();
    if report.scanned() == 0 {
        warnings.push(BoundaryWarning::NoDocumentsFound {
            root: root.to_path_buf(),
            extensions: config.documents.extensions.clone(),
        });
    }
    warnings
}

/// Rewrites every document under `root` to point at `target`.
///
/// Documents are processed one at a time in walk order. The first error
/// aborts the run; documents already written stay written.
pub fn run(
    root: &Path,
    target: &TargetVersion,
    options: &RunOptions,
    config: &Config,
) -> Result<RunReport> {
    let rewriter = Rewriter::new(&config.urls)?;
    let write = !options.dry_run;

    info!(
        "Rewriting documentation URLs under {:?} to {} (dry run: {})",
        root, target, options.dry_run
    );

    let documents = find_documents(root, &config.documents)?
        .iter()
        .map(|path| process_document(path, &rewriter, target, write))
        .collect::<Result<Vec<_>>>()?;

    let report = RunReport::new(documents, write);
    info!(
        "Scanned {} documents, {} changed",
        report.scanned(),
        report.changed()
    );
    Ok(report)
}
