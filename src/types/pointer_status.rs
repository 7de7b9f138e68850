//! Status of an execution pointer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of an execution pointer (one visit of a step).
///
/// Statuses introduced by newer orchestrators deserialize to `Unknown` rather
/// than failing, so older visualizers keep rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerStatus {
  Pending,
  InProcess,
  Completed,
  Retrying,
  WaitingForEvent,
  Suspended,
  #[serde(other)]
  Unknown,
}

impl fmt::Display for PointerStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PointerStatus::Pending => write!(f, "pending"),
      PointerStatus::InProcess => write!(f, "in_process"),
      PointerStatus::Completed => write!(f, "completed"),
      PointerStatus::Retrying => write!(f, "retrying"),
      PointerStatus::WaitingForEvent => write!(f, "waiting_for_event"),
      PointerStatus::Suspended => write!(f, "suspended"),
      PointerStatus::Unknown => write!(f, "unknown"),
    }
  }
}
