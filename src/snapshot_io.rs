//! Load orchestration snapshots (JSON).

use std::path::Path;

use tracing::instrument;

use crate::error::{Result, VisualizerError};
use crate::types::OrchestrationSnapshot;

/// Parses a snapshot from a JSON string.
pub fn parse_snapshot(json: &str) -> Result<OrchestrationSnapshot> {
  Ok(serde_json::from_str(json)?)
}

/// Loads a snapshot from `path`. Returns error if file is missing or invalid JSON.
#[instrument(level = "trace", skip(path), fields(path = %path.display()))]
pub fn load_snapshot(path: &Path) -> Result<OrchestrationSnapshot> {
  let bytes = std::fs::read(path).map_err(|source| VisualizerError::SnapshotIo {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(serde_json::from_slice(&bytes)?)
}
