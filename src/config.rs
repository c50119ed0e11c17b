use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DocsBumpError, Result};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "docsbump.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".docsbump.toml";

/// Represents the complete configuration for docs-version-bump.
///
/// Contains the document selection rules and the URL families to rewrite.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub documents: DocumentsConfig,

    #[serde(default)]
    pub urls: UrlsConfig,
}

/// Returns the default list of document extensions.
fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

/// Returns the default list of directory names skipped during the walk.
fn default_exclude() -> Vec<String> {
    vec!["node_modules".to_string(), ".git".to_string()]
}

/// Which files under the root directory count as documents.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocumentsConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        DocumentsConfig {
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

impl DocumentsConfig {
    /// Returns true if `path` has one of the configured extensions.
    ///
    /// Extensions are compared case-insensitively and may be written with or
    /// without a leading dot.
    pub fn is_document(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        self.extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(&ext))
    }

    /// Returns true if a directory with this name is skipped.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|name| name == dir_name)
    }
}

fn default_guides_host() -> String {
    "guides.emberjs.com".to_string()
}

fn default_api_host() -> String {
    "api.emberjs.com".to_string()
}

fn default_api_products() -> Vec<String> {
    vec!["ember".to_string(), "ember-data".to_string()]
}

/// Hosts and products of the documentation URLs that get rewritten.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UrlsConfig {
    #[serde(default = "default_guides_host")]
    pub guides_host: String,

    #[serde(default = "default_api_host")]
    pub api_host: String,

    #[serde(default = "default_api_products")]
    pub api_products: Vec<String>,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        UrlsConfig {
            guides_host: default_guides_host(),
            api_host: default_api_host(),
            api_products: default_api_products(),
        }
    }
}

impl Config {
    /// Rejects configurations that could never select or rewrite anything.
    pub fn validate(&self) -> Result<()> {
        if self.documents.extensions.is_empty() {
            return Err(DocsBumpError::config(
                "documents.extensions must list at least one extension",
            ));
        }
        if self.urls.guides_host.trim().is_empty() || self.urls.api_host.trim().is_empty() {
            return Err(DocsBumpError::config("URL hosts must not be empty"));
        }
        if self.urls.api_products.iter().any(|p| p.trim().is_empty()) {
            return Err(DocsBumpError::config("API product names must not be empty"));
        }
        if self.urls.api_products.is_empty() {
            return Err(DocsBumpError::config(
                "urls.api_products must list at least one product",
            ));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docsbump.toml` in current directory
/// 3. `.docsbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
