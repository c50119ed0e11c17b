//! Document discovery and the per-document read/rewrite/write cycle.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::DocumentsConfig;
use crate::domain::{DocumentOutcome, TargetVersion};
use crate::error::Result;
use crate::rewrite::Rewriter;

/// Finds every document under `root`, sorted by file name within each
/// directory.
///
/// Directories listed in `documents.exclude` are not descended into. The root
/// itself is never excluded.
pub fn find_documents(root: &Path, documents: &DocumentsConfig) -> Result<Vec<PathBuf>> {
    let mut result = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, documents));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && documents.is_document(entry.path()) {
            result.push(entry.into_path());
        }
    }

    debug!("Found {} documents under {:?}", result.len(), root);
    Ok(result)
}

fn is_excluded_dir(entry: &DirEntry, documents: &DocumentsConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && documents.is_excluded(&entry.file_name().to_string_lossy())
}

/// Reads one document, rewrites it, and writes it back when it changed and
/// `write` is set.
pub fn process_document(
    path: &Path,
    rewriter: &Rewriter,
    target: &TargetVersion,
    write: bool,
) -> Result<DocumentOutcome> {
    let original = fs::read_to_string(path)?;
    let updated = rewriter.rewrite(&original, target);
    let changed = updated != original;

    if changed && write {
        fs::write(path, updated)?;
        debug!("Rewrote {:?}", path);
    } else if changed {
        debug!("Would rewrite {:?}", path);
    }

    Ok(DocumentOutcome::new(path, changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_find_documents_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "b.md", "");
        write_file(dir.path(), "a.md", "");
        write_file(dir.path(), "nested/c.md", "");
        write_file(dir.path(), "image.png", "");
        write_file(dir.path(), "node_modules/pkg/README.md", "");

        let found = find_documents(dir.path(), &DocumentsConfig::default()).unwrap();
        let relative: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("a.md"),
                PathBuf::from("b.md"),
                PathBuf::from("nested/c.md"),
            ]
        );
    }

    #[test]
    fn test_find_documents_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(find_documents(&missing, &DocumentsConfig::default()).is_err());
    }

    #[test]
    fn test_process_document_writes_changes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            dir.path(),
            "index.md",
            "Read https://guides.emberjs.com/release/ first.\n",
        );

        let outcome =
            process_document(&path, &Rewriter::default(), &"3.15".into(), true).unwrap();

        assert!(outcome.changed);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Read https://guides.emberjs.com/v3.15.0/ first.\n"
        );
    }

    #[test]
    fn test_process_document_dry_run_leaves_file() {
        let dir = TempDir::new().unwrap();
        let content = "https://api.emberjs.com/ember/release/\n";
        let path = write_file(dir.path(), "api.md", content);

        let outcome =
            process_document(&path, &Rewriter::default(), &"3.15".into(), false).unwrap();

        assert!(outcome.changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_process_document_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "plain.md", "# Nothing to see\n");

        let outcome =
            process_document(&path, &Rewriter::default(), &"3.15".into(), true).unwrap();

        assert!(!outcome.changed);
        assert_eq!(outcome.path, path);
    }

    #[test]
    fn test_process_document_rejects_non_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(process_document(&path, &Rewriter::default(), &"3.15".into(), true).is_err());
    }
}
