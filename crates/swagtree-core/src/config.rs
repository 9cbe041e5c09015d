use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

/// Top-level configuration for Swagtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwagtreeConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How documents are turned into a catalog tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub layout: LayoutMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Tagged for `swagger` documents, path segments for `openapi` ones
    #[default]
    Auto,
    /// tag -> path -> operation
    Tagged,
    /// one level per path segment -> operation
    PathSegments,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub case_sensitive: bool,
    /// Expand every node of a filtered view
    #[serde(default = "default_true")]
    pub expand_matches: bool,
}

/// Where bookmarks and the last session are kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_bookmark_dir")]
    pub bookmark_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_bookmark_dir() -> PathBuf {
    PathBuf::from(".swagtree").join("bookmarks")
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            expand_matches: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bookmark_dir: default_bookmark_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl SwagtreeConfig {
    /// Load config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
