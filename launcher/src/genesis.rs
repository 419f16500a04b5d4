//! Genesis timestamp patching.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::LauncherError;

/// Top-level genesis field holding the first epoch's start time (Unix ms).
pub const GENESIS_TIMESTAMP_FIELD: &str = "FIRST_EPOCH_START_TIMESTAMP";

/// Set the first-epoch timestamp in a genesis document.
///
/// Every other field keeps its value and position. A missing timestamp field
/// is appended.
pub fn set_genesis_timestamp(document: &str, now_ms: u64) -> Result<String, LauncherError> {
    let mut genesis: Value = serde_json::from_str(document)
        .map_err(|e| LauncherError::InvalidGenesis(e.to_string()))?;
    let fields = genesis
        .as_object_mut()
        .ok_or_else(|| LauncherError::InvalidGenesis("top level is not a JSON object".into()))?;
    fields.insert(GENESIS_TIMESTAMP_FIELD.to_string(), Value::from(now_ms));
    Ok(serde_json::to_string_pretty(&genesis)?)
}

/// Rewrite the genesis file at `path` with `now_ms` as its start timestamp.
pub fn patch_genesis_timestamp(path: &Path, now_ms: u64) -> Result<(), LauncherError> {
    let document = fs::read_to_string(path).map_err(LauncherError::io(path))?;
    let patched = set_genesis_timestamp(&document, now_ms)?;
    fs::write(path, patched).map_err(LauncherError::io(path))?;
    tracing::info!(path = %path.display(), timestamp = now_ms, "updated genesis timestamp");
    Ok(())
}
