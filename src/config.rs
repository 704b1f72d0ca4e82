//! `licensedb.toml` configuration
//!
//! Points the database at a license-text directory and lets projects extend
//! the built-in alias, deprecation and exception tables without patching the
//! crate.
//!
//! ```toml
//! data_dir = "vendor/license-list-data/text"
//! exceptions = ["Vendor-linking-exception"]
//!
//! [aliases]
//! expat = "MIT"
//!
//! [deprecated]
//! "gpl-2.0-with-vendor-exception" = ["gpl-2.0-only", "with", "vendor-linking-exception"]
//! ```

use crate::{LicenseDbError, LicenseDbResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file names probed in a project root, in order
pub const CONFIG_FILE_NAMES: &[&str] = &["licensedb.toml", ".licensedb.toml"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseDbConfig {
    /// Directory with one text file per identifier
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Extra non-standard spellings, merged over the built-in list
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Extra deprecated spellings and their replacement tokens
    #[serde(default)]
    pub deprecated: BTreeMap<String, Vec<String>>,

    /// Extra identifiers to treat as exceptions
    #[serde(default)]
    pub exceptions: Vec<String>,

    /// Nesting limit for deprecated-token expansion
    #[serde(default = "default_max_expansion_depth")]
    pub max_expansion_depth: usize,
}

fn default_max_expansion_depth() -> usize {
    8
}

impl Default for LicenseDbConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            aliases: BTreeMap::new(),
            deprecated: BTreeMap::new(),
            exceptions: vec![],
            max_expansion_depth: default_max_expansion_depth(),
        }
    }
}

impl LicenseDbConfig {
    /// Load config from a TOML file. A relative `data_dir` is taken relative
    /// to the file's directory.
    pub fn from_file(path: &Path) -> LicenseDbResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: LicenseDbConfig = toml::from_str(&content).map_err(|e| {
            LicenseDbError::ConfigError(format!("{}: {}", path.display(), e))
        })?;

        if let Some(parent) = path.parent() {
            config.data_dir = config.data_dir.map(|dir| {
                if dir.is_relative() {
                    parent.join(dir)
                } else {
                    dir
                }
            });
        }
        Ok(config)
    }

    /// Try the known config names under `root`, fall back to defaults
    pub fn from_project_root(root: &Path) -> Self {
        for name in CONFIG_FILE_NAMES {
            let path = root.join(name);
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded licensedb config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}, using defaults", path.display(), e);
                }
            }
        }
        Self::default()
    }
}
