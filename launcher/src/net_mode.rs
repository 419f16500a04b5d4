//! Network size descriptors such as `TESTNET_5V`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::LauncherError;

/// Names a prepared network: the last `_`-separated token is the number of
/// validator nodes followed by `V`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetMode(String);

impl NetMode {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of nodes in the network (`TESTNET_21V` → 21).
    pub fn nodes_count(&self) -> Result<usize, LauncherError> {
        let invalid = || LauncherError::InvalidNetMode(self.0.clone());

        let last = self.0.rsplit('_').next().ok_or_else(invalid)?;
        let digits = last.strip_suffix('V').ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match digits.parse::<usize>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(count) => Ok(count),
        }
    }
}

impl fmt::Display for NetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
