use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions noticed while preparing or finishing a run.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Target version is not a plain `MAJOR.MINOR[.PATCH]` release number
    UnrecognizedTargetVersion { version: String },
    /// The walk found no document with a configured extension
    NoDocumentsFound {
        root: PathBuf,
        extensions: Vec<String>,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnrecognizedTargetVersion { version } => {
                write!(
                    f,
                    "Target version '{}' is not a MAJOR.MINOR or MAJOR.MINOR.PATCH release number; substituting it as given",
                    version
                )
            }
            BoundaryWarning::NoDocumentsFound { root, extensions } => {
                write!(
                    f,
                    "No documents with extension {} found under '{}'",
                    extensions.join(", "),
                    root.display()
                )
            }
        }
    }
}
