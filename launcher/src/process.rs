//! Spawning and supervising node processes.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};

use crate::LauncherError;

/// Environment variable through which a node learns its data directory.
pub const NODE_DIR_ENV: &str = "CHAINDATA_PATH";

/// A running node and the directory it was started in.
#[derive(Debug)]
pub struct NodeProcess {
    node_dir: PathBuf,
    child: Child,
}

impl NodeProcess {
    pub fn node_dir(&self) -> &Path {
        &self.node_dir
    }

    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }
}

/// How a node process ended.
#[derive(Debug)]
pub struct NodeExit {
    pub node_dir: PathBuf,
    /// `None` when the exit status could not be collected.
    pub status: Option<ExitStatus>,
}

impl NodeExit {
    pub fn success(&self) -> bool {
        self.status.is_some_and(|s| s.success())
    }
}

/// Start `core_path` for the node in `node_dir`.
///
/// The node runs with `node_dir` as its working directory and in
/// [`NODE_DIR_ENV`], and shares the launcher's stdio.
pub fn spawn_node(node_dir: &Path, core_path: &Path) -> Result<NodeProcess, LauncherError> {
    let child = Command::new(core_path)
        .current_dir(node_dir)
        .env(NODE_DIR_ENV, node_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| LauncherError::Spawn {
            node_dir: node_dir.to_path_buf(),
            source,
        })?;

    tracing::info!(node_dir = %node_dir.display(), pid = ?child.id(), "node started");
    Ok(NodeProcess {
        node_dir: node_dir.to_path_buf(),
        child,
    })
}

/// Wait for every node to exit, in spawn order.
pub async fn wait_all(nodes: Vec<NodeProcess>) -> Vec<NodeExit> {
    let mut exits = Vec::with_capacity(nodes.len());
    for NodeProcess { node_dir, mut child } in nodes {
        let status = match child.wait().await {
            Ok(status) => {
                if status.success() {
                    tracing::info!(node_dir = %node_dir.display(), "node exited");
                } else {
                    tracing::warn!(node_dir = %node_dir.display(), %status, "node exited with failure");
                }
                Some(status)
            }
            Err(e) => {
                tracing::warn!(node_dir = %node_dir.display(), error = %e, "failed to wait for node");
                None
            }
        };
        exits.push(NodeExit { node_dir, status });
    }
    exits
}
