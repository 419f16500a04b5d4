use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid net mode {0:?}: expected a name ending in the node count, e.g. TESTNET_5V")]
    InvalidNetMode(String),

    #[error("invalid genesis document: {0}")]
    InvalidGenesis(String),

    #[error("failed to spawn node in {}: {source}", node_dir.display())]
    Spawn {
        node_dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LauncherError {
    /// Adapter for `map_err` that tags an IO error with the path involved.
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| LauncherError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
