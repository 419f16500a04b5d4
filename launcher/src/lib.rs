//! NetSpawner launcher.
//!
//! Prepares per-node directories for a local test network, optionally resets
//! it to genesis, then runs one worker process per node and waits for all of
//! them to exit.

pub mod config;
pub mod error;
pub mod genesis;
pub mod layout;
pub mod net_mode;
pub mod process;
pub mod provision;

pub use config::{LauncherConfig, CONFIG_FILE};
pub use error::LauncherError;
pub use genesis::{patch_genesis_timestamp, set_genesis_timestamp, GENESIS_TIMESTAMP_FIELD};
pub use layout::NetworkLayout;
pub use net_mode::NetMode;
pub use process::{spawn_node, wait_all, NodeExit, NodeProcess, NODE_DIR_ENV};
pub use provision::{copy_file, ensure_dir, ensure_node_dirs, provision_nodes, reset_chaindata};

use std::path::Path;
use std::time::Instant;

use netspawner_utils::{format_duration, Clock};

/// Start the network from wherever its chain data left off.
pub async fn resume_network(root: &Path) -> Result<Vec<NodeExit>, LauncherError> {
    let config = LauncherConfig::load(root)?;
    let layout = NetworkLayout::new(root, &config.net_mode)?;
    run_nodes(&layout, &config.core_path).await
}

/// Re-provision the network from its source files, restart it at genesis
/// with the current time, and run it.
pub async fn reset_network(
    root: &Path,
    clock: &impl Clock,
) -> Result<Vec<NodeExit>, LauncherError> {
    let config = LauncherConfig::load(root)?;
    let layout = NetworkLayout::new(root, &config.net_mode)?;
    prepare_reset(&layout, clock.now_millis())?;
    run_nodes(&layout, &config.core_path).await
}

/// Provision node directories, stamp every genesis with `now_ms` and delete
/// all chain data.
pub fn prepare_reset(layout: &NetworkLayout, now_ms: u64) -> Result<(), LauncherError> {
    provision_nodes(layout)?;
    for index in layout.node_indices() {
        let genesis = layout.genesis_path(index);
        if genesis.is_file() {
            patch_genesis_timestamp(&genesis, now_ms)?;
        }
    }
    let removed = reset_chaindata(layout)?;
    tracing::info!(timestamp = now_ms, removed, "network reset to genesis");
    Ok(())
}

async fn run_nodes(layout: &NetworkLayout, core_path: &Path) -> Result<Vec<NodeExit>, LauncherError> {
    let dirs = ensure_node_dirs(layout)?;
    let mut nodes = Vec::with_capacity(dirs.len());
    for dir in &dirs {
        nodes.push(spawn_node(dir, core_path)?);
    }

    tracing::info!(nodes = nodes.len(), core = %core_path.display(), "network running");
    let started = Instant::now();
    let exits = wait_all(nodes).await;
    let failed = exits.iter().filter(|e| !e.success()).count();
    tracing::info!(
        uptime = %format_duration(started.elapsed().as_secs()),
        failed,
        "all nodes exited"
    );
    Ok(exits)
}
