//! Errors raised while loading or rendering an orchestration graph.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::StepId;

/// Errors raised while loading or rendering an orchestration graph.
#[derive(Debug, Error)]
pub enum VisualizerError {
  #[error("step {0} is referenced but not declared in the orchestration graph")]
  UnknownStep(StepId),

  #[error("step {0} is declared more than once in the orchestration graph")]
  DuplicateStep(StepId),

  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("failed to read snapshot {}: {source}", .path.display())]
  SnapshotIo {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid snapshot JSON: {0}")]
  SnapshotJson(#[from] serde_json::Error),

  #[error("renderer failed: {0}")]
  Render(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
