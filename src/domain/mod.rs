//! Domain values - pure types independent of the file system

pub mod document;
pub mod version;

pub use document::{DocumentOutcome, RunReport};
pub use version::TargetVersion;
