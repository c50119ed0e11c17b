use std::path::{Path, PathBuf};

/// Result of running the rewriter over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    pub path: PathBuf,
    pub changed: bool,
}

impl DocumentOutcome {
    pub fn new(path: impl Into<PathBuf>, changed: bool) -> Self {
        DocumentOutcome {
            path: path.into(),
            changed,
        }
    }
}

/// Outcome of a whole run, in walk order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    pub documents: Vec<DocumentOutcome>,
    /// Whether changed documents were written back to disk.
    pub written: bool,
}

impl RunReport {
    pub fn new(documents: Vec<DocumentOutcome>, written: bool) -> Self {
        RunReport { documents, written }
    }

    /// Number of documents read.
    pub fn scanned(&self) -> usize {
        self.documents.len()
    }

    /// Number of documents whose content differs after rewriting.
    pub fn changed(&self) -> usize {
        self.documents.iter().filter(|doc| doc.changed).count()
    }

    /// Paths of changed documents, in walk order.
    pub fn changed_paths(&self) -> Vec<&Path> {
        self.documents
            .iter()
            .filter(|doc| doc.changed)
            .map(|doc| doc.path.as_path())
            .collect()
    }
}
