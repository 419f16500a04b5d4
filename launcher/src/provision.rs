//! Filesystem preparation of node directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{LauncherError, NetworkLayout};

/// Create `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<(), LauncherError> {
    fs::create_dir_all(path).map_err(LauncherError::io(path))
}

/// Copy `from` to `to`, replacing any existing file.
///
/// Failures to open the source name `from`; failures to create or write the
/// destination name `to`.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), LauncherError> {
    let mut source = fs::File::open(from).map_err(LauncherError::io(from))?;
    let mut dest = fs::File::create(to).map_err(LauncherError::io(to))?;
    io::copy(&mut source, &mut dest).map_err(LauncherError::io(to))?;
    Ok(())
}

/// Make sure every `V<i>` directory exists; returns them in index order.
pub fn ensure_node_dirs(layout: &NetworkLayout) -> Result<Vec<PathBuf>, LauncherError> {
    let dirs = layout.node_dirs();
    for dir in &dirs {
        ensure_dir(dir)?;
    }
    Ok(dirs)
}

/// Create the node directories and copy the shared genesis plus each node's
/// own config into them.
pub fn provision_nodes(layout: &NetworkLayout) -> Result<(), LauncherError> {
    ensure_dir(&layout.network_dir())?;
    let genesis = layout.source_genesis();

    for index in layout.node_indices() {
        ensure_dir(&layout.node_dir(index))?;
        copy_file(&genesis, &layout.genesis_path(index))?;
        copy_file(
            &layout.source_node_config(index),
            &layout.node_config_path(index),
        )?;
    }

    tracing::info!(
        nodes = layout.nodes_count(),
        network_dir = %layout.network_dir().display(),
        "node directories provisioned"
    );
    Ok(())
}

/// Remove every node's `CHAINDATA` directory. Returns how many were removed.
pub fn reset_chaindata(layout: &NetworkLayout) -> Result<usize, LauncherError> {
    let mut removed = 0;
    for index in layout.node_indices() {
        let dir = layout.chaindata_dir(index);
        match fs::remove_dir_all(&dir) {
            Ok(()) => {
                tracing::info!(dir = %dir.display(), "deleted chain data");
                removed += 1;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(LauncherError::io(&dir)(e)),
        }
    }
    Ok(removed)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::NetMode;

    /// Lay out source files for a network of `nodes` nodes under `root`.
    pub(crate) fn seed_sources(root: &Path, net_mode: &str, nodes: usize) -> NetworkLayout {
        let layout = NetworkLayout::new(root, &NetMode::new(net_mode)).unwrap();
        fs::create_dir_all(layout.sources_dir().join("configs_for_nodes")).unwrap();
        fs::write(
            layout.source_genesis(),
            r#"{"NETWORK_ID":"local","FIRST_EPOCH_START_TIMESTAMP":0,"VALIDATORS":[]}"#,
        )
        .unwrap();
        for i in 1..=nodes {
            fs::write(layout.source_node_config(i), format!(r#"{{"node":{i}}}"#)).unwrap();
        }
        layout
    }

    #[test]
    fn provisions_every_node() {
        let dir = tempfile::tempdir().unwrap();
        let layout = seed_sources(dir.path(), "TESTNET_3V", 3);

        provision_nodes(&layout).unwrap();

        for i in 1..=3 {
            let genesis = fs::read_to_string(layout.genesis_path(i)).unwrap();
            assert!(genesis.contains("FIRST_EPOCH_START_TIMESTAMP"));
            let config = fs::read_to_string(layout.node_config_path(i)).unwrap();
            assert_eq!(config, format!(r#"{{"node":{i}}}"#));
        }
    }

    #[test]
    fn missing_node_config_names_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let layout = seed_sources(dir.path(), "TESTNET_2V", 1);

        match provision_nodes(&layout) {
            Err(LauncherError::Io { path, .. }) => assert_eq!(path, layout.source_node_config(2)),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn copy_failures_name_the_failing_side() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("genesis.json");
        fs::write(&from, "{}").unwrap();

        let to = dir.path().join("missing").join("genesis.json");
        match copy_file(&from, &to) {
            Err(LauncherError::Io { path, .. }) => assert_eq!(path, to),
            other => panic!("expected Io error, got {other:?}"),
        }

        let absent = dir.path().join("absent.json");
        match copy_file(&absent, &dir.path().join("out.json")) {
            Err(LauncherError::Io { path, .. }) => assert_eq!(path, absent),
            other => panic!("expected Io error, got {other:?}"),
        }

        let copied = dir.path().join("copy.json");
        copy_file(&from, &copied).unwrap();
        assert_eq!(fs::read_to_string(copied).unwrap(), "{}");
    }

    #[test]
    fn provisioning_overwrites_previous_copies() {
        let dir = tempfile::tempdir().unwrap();
        let layout = seed_sources(dir.path(), "TESTNET_2V", 2);
        provision_nodes(&layout).unwrap();
        fs::write(layout.node_config_path(1), "stale").unwrap();

        provision_nodes(&layout).unwrap();
        assert_eq!(fs::read_to_string(layout.node_config_path(1)).unwrap(), r#"{"node":1}"#);
    }

    #[test]
    fn ensure_node_dirs_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let layout = NetworkLayout::new(dir.path(), &NetMode::new("TESTNET_2V")).unwrap();
        let dirs = ensure_node_dirs(&layout).unwrap();
        assert_eq!(dirs.len(), 2);
        assert!(dirs.iter().all(|d| d.is_dir()));
    }

    #[test]
    fn reset_removes_only_existing_chaindata() {
        let dir = tempfile::tempdir().unwrap();
        let layout = NetworkLayout::new(dir.path(), &NetMode::new("TESTNET_3V")).unwrap();
        ensure_node_dirs(&layout).unwrap();
        fs::create_dir_all(layout.chaindata_dir(1).join("blocks")).unwrap();
        fs::write(layout.chaindata_dir(1).join("blocks/0001"), b"data").unwrap();
        fs::create_dir_all(layout.chaindata_dir(3)).unwrap();

        assert_eq!(reset_chaindata(&layout).unwrap(), 2);
        for i in 1..=3 {
            assert!(!layout.chaindata_dir(i).exists());
            assert!(layout.node_dir(i).is_dir());
        }
        assert_eq!(reset_chaindata(&layout).unwrap(), 0);
    }
}
