//! User interface module - console reporting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - `Reporter`, which decides what gets printed for a run

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_changed_paths, display_error, display_self_test_outcome,
    display_status, display_success, display_summary,
};

use crate::boundary::BoundaryWarning;
use crate::cli::orchestration::RunOptions;
use crate::domain::RunReport;
use crate::self_test::SelfTestOutcome;

/// Prints run output according to the silent and verbose flags.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    silent: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(options: &RunOptions) -> Self {
        Reporter {
            silent: options.silent,
            verbose: options.verbose,
        }
    }

    pub fn status(&self, message: &str) {
        if !self.silent {
            display_status(message);
        }
    }

    pub fn warning(&self, warning: &BoundaryWarning) {
        if !self.silent {
            display_boundary_warning(warning);
        }
    }

    pub fn error(&self, message: &str) {
        if !self.silent {
            display_error(message);
        }
    }

    /// Prints the summary and, when verbose, the changed document paths.
    pub fn report(&self, report: &RunReport) {
        if self.silent {
            return;
        }
        display_summary(report);
        if self.verbose {
            display_changed_paths(&report.changed_paths());
        }
    }

    pub fn self_test(&self, outcomes: &[SelfTestOutcome]) {
        if self.silent {
            return;
        }
        for outcome in outcomes {
            display_self_test_outcome(outcome);
        }
    }
}
