use thiserror::Error;

/// Unified error type for docs-version-bump operations
#[derive(Error, Debug)]
pub enum DocsBumpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid URL pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience type alias for Results in docs-version-bump
pub type Result<T> = std::result::Result<T, DocsBumpError>;

impl DocsBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocsBumpError::Config(msg.into())
    }
}
