//! Launcher configuration, read from `config.json` in the launcher root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{LauncherError, NetMode};

/// File name of the launcher configuration inside the root directory.
pub const CONFIG_FILE: &str = "config.json";

/// Which worker binary to run and which prepared network to run it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherConfig {
    /// Path to the node binary. Relative paths are taken from the root.
    pub core_path: PathBuf,
    pub net_mode: NetMode,
}

impl LauncherConfig {
    /// Load `<root>/config.json`.
    pub fn load(root: &Path) -> Result<Self, LauncherError> {
        let path = root.join(CONFIG_FILE);
        let content = std::fs::read_to_string(&path).map_err(LauncherError::io(&path))?;
        let mut config = Self::from_json_str(&content)?;
        if config.core_path.is_relative() {
            config.core_path = root.join(&config.core_path);
        }
        tracing::debug!(
            path = %path.display(),
            core_path = %config.core_path.display(),
            net_mode = %config.net_mode,
            "loaded launcher config"
        );
        Ok(config)
    }

    /// Parse and validate a configuration document.
    pub fn from_json_str(s: &str) -> Result<Self, LauncherError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| LauncherError::Config(e.to_string()))?;
        if config.core_path.as_os_str().is_empty() {
            return Err(LauncherError::Config("corePath must not be empty".into()));
        }
        config.net_mode.nodes_count()?;
        Ok(config)
    }
}
