//! Output options for a rendered diagram.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::GraphvizColor;
use crate::error::{Result, VisualizerError};

/// Default DOT graph name.
pub const DEFAULT_GRAPH_NAME: &str = "G";

/// Graphviz `rankdir` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDir {
  TopBottom,
  LeftRight,
  BottomTop,
  RightLeft,
}

impl fmt::Display for RankDir {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RankDir::TopBottom => write!(f, "TB"),
      RankDir::LeftRight => write!(f, "LR"),
      RankDir::BottomTop => write!(f, "BT"),
      RankDir::RightLeft => write!(f, "RL"),
    }
  }
}

impl FromStr for RankDir {
  type Err = VisualizerError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_uppercase().as_str() {
      "TB" => Ok(RankDir::TopBottom),
      "LR" => Ok(RankDir::LeftRight),
      "BT" => Ok(RankDir::BottomTop),
      "RL" => Ok(RankDir::RightLeft),
      other => Err(VisualizerError::InvalidArgument(format!(
        "rankdir must be one of TB, LR, BT, RL (got '{other}')"
      ))),
    }
  }
}

/// Output options for a rendered diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
  pub graph_name: String,
  pub rank_dir: Option<RankDir>,
  /// Background of branch clusters.
  pub cluster_background: GraphvizColor,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      graph_name: DEFAULT_GRAPH_NAME.to_string(),
      rank_dir: None,
      cluster_background: GraphvizColor::WhiteSmoke,
    }
  }
}

impl RenderOptions {
  pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
    self.graph_name = name.into();
    self
  }

  pub fn with_rank_dir(mut self, rank_dir: RankDir) -> Self {
    self.rank_dir = Some(rank_dir);
    self
  }

  pub fn validate(&self) -> Result<()> {
    if self.graph_name.trim().is_empty() {
      return Err(VisualizerError::InvalidArgument(
        "graph name must not be empty".to_string(),
      ));
    }
    Ok(())
  }
}
