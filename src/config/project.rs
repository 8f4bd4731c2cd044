//! Project configuration file (`hdrgen.toml`).
//!
//! Every setting is optional. Command-line flags win over the file, and the
//! file wins over built-in defaults. Relative paths in the file are resolved
//! against the project directory, not the current directory.
//!
//! ```toml
//! [amalgamate]
//! input = "include/boost/leaf/detail/all.hpp"
//! output = "test/leaf.hpp"
//! include_path = "include"
//! prefix = "boost/leaf"
//!
//! [amalgamate.banner]
//! guard = "BOOST_LEAF_HPP_INCLUDED"
//!
//! [fetch]
//! destination = "test/nlohmann/json.hpp"
//! ```

use crate::amalgamate::BannerConfig;
use crate::constants::CONFIG_FILE_NAME;
use crate::core::HdrgenError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Contents of `hdrgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub amalgamate: AmalgamateSection,
    pub fetch: FetchSection,
}

/// `[amalgamate]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmalgamateSection {
    /// Root header to amalgamate
    pub input: Option<PathBuf>,
    /// Generated single header
    pub output: Option<PathBuf>,
    /// Directory include names are resolved against
    pub include_path: Option<PathBuf>,
    /// Include prefix selecting which headers get inlined
    pub prefix: Option<String>,
    /// Emit live `#line` directives
    pub line_refs: Option<bool>,
    /// Re-expand every include instead of collapsing repeats
    pub expand_all: Option<bool>,
    /// Substring opening the copyright block stripped from each header
    pub copyright_marker: Option<String>,
    pub banner: BannerConfig,
}

/// `[fetch]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSection {
    pub url: Option<String>,
    pub destination: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `<project_dir>/hdrgen.toml`
    /// is used when present and defaults otherwise.
    pub async fn discover(explicit: Option<&Path>, project_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(HdrgenError::FileSystemError {
                    operation: "config load".to_string(),
                    path: path.display().to_string(),
                }
                .into());
            }
            return Self::load_from(path).await;
        }

        let default_path = project_dir.join(CONFIG_FILE_NAME);
        if default_path.exists() {
            Self::load_from(&default_path).await
        } else {
            debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_dir.display());
            Ok(Self::default())
        }
    }

    /// Parse a configuration file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = toml::from_str(&content).map_err(|e| HdrgenError::ConfigParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Resolve a path from the config file against the project directory.
#[must_use]
pub fn resolve_path(project_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}
