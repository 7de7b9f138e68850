//! Graphviz colors used by the visualizer and the status-to-color mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::PointerStatus;

/// The subset of X11 color names the visualizer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphvizColor {
  Transparent,
  Orange,
  LightGreen,
  Red,
  Green,
  Blue,
  Purple,
  Black,
  WhiteSmoke,
}

impl GraphvizColor {
  /// DOT attribute value.
  pub fn dot_name(self) -> &'static str {
    match self {
      GraphvizColor::Transparent => "transparent",
      GraphvizColor::Orange => "orange",
      GraphvizColor::LightGreen => "lightgreen",
      GraphvizColor::Red => "red",
      GraphvizColor::Green => "green",
      GraphvizColor::Blue => "blue",
      GraphvizColor::Purple => "purple",
      GraphvizColor::Black => "black",
      GraphvizColor::WhiteSmoke => "whitesmoke",
    }
  }
}

impl fmt::Display for GraphvizColor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.dot_name())
  }
}

/// Fill color for a vertex whose latest visit has `status`.
///
/// Statuses this crate does not know render as in-flight (orange).
pub fn color_for(status: PointerStatus) -> GraphvizColor {
  match status {
    PointerStatus::Pending | PointerStatus::InProcess | PointerStatus::WaitingForEvent => {
      GraphvizColor::Orange
    }
    PointerStatus::Completed => GraphvizColor::LightGreen,
    PointerStatus::Retrying | PointerStatus::Suspended => GraphvizColor::Red,
    PointerStatus::Unknown => GraphvizColor::Orange,
  }
}
