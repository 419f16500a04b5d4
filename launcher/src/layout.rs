//! On-disk layout of a prepared network.
//!
//! ```text
//! <root>/
//!   config.json
//!   files/testnets/<netMode>/genesis.json
//!   files/testnets/<netMode>/configs_for_nodes/config_<i>.json
//!   X<netMode>/V<i>/{genesis.json, configs.json, CHAINDATA/}
//! ```

use std::path::{Path, PathBuf};

use crate::{LauncherError, NetMode};

pub const GENESIS_FILE: &str = "genesis.json";
pub const NODE_CONFIG_FILE: &str = "configs.json";
pub const CHAINDATA_DIR: &str = "CHAINDATA";

/// Resolved paths for one network under a launcher root. Node indices are
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkLayout {
    root: PathBuf,
    net_mode: NetMode,
    nodes: usize,
}

impl NetworkLayout {
    pub fn new(root: impl Into<PathBuf>, net_mode: &NetMode) -> Result<Self, LauncherError> {
        Ok(Self {
            root: root.into(),
            nodes: net_mode.nodes_count()?,
            net_mode: net_mode.clone(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes
    }

    pub fn node_indices(&self) -> impl Iterator<Item = usize> {
        1..=self.nodes
    }

    /// `<root>/X<netMode>`
    pub fn network_dir(&self) -> PathBuf {
        self.root.join(format!("X{}", self.net_mode))
    }

    /// `<root>/X<netMode>/V<index>`
    pub fn node_dir(&self, index: usize) -> PathBuf {
        self.network_dir().join(format!("V{index}"))
    }

    pub fn node_dirs(&self) -> Vec<PathBuf> {
        self.node_indices().map(|i| self.node_dir(i)).collect()
    }

    pub fn genesis_path(&self, index: usize) -> PathBuf {
        self.node_dir(index).join(GENESIS_FILE)
    }

    pub fn node_config_path(&self, index: usize) -> PathBuf {
        self.node_dir(index).join(NODE_CONFIG_FILE)
    }

    pub fn chaindata_dir(&self, index: usize) -> PathBuf {
        self.node_dir(index).join(CHAINDATA_DIR)
    }

    /// `<root>/files/testnets/<netMode>`
    pub fn sources_dir(&self) -> PathBuf {
        self.root
            .join("files")
            .join("testnets")
            .join(self.net_mode.as_str())
    }

    pub fn source_genesis(&self) -> PathBuf {
        self.sources_dir().join(GENESIS_FILE)
    }

    pub fn source_node_config(&self, index: usize) -> PathBuf {
        self.sources_dir()
            .join("configs_for_nodes")
            .join(format!("config_{index}.json"))
    }
}
