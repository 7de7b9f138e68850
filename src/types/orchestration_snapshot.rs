//! Serialized orchestration snapshot: structure plus execution pointers.
//!
//! This is the on-disk form read by `render_graph`. Branch relationships are
//! declared once, on the branch (`controller`), and resolved into
//! [`Step`](super::Step) fields by the graph loader.

use serde::{Deserialize, Serialize};

use super::{ExecutionPointer, StepId};

/// A step as declared in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
  pub id: StepId,
  pub name: String,
  #[serde(default)]
  pub is_starting_step: bool,
}

/// A transition as declared in a snapshot. Endpoints may live at any level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDefinition {
  pub from: StepId,
  pub to: StepId,
  #[serde(default)]
  pub title: String,
}

/// One level of the orchestration and its nested branches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition {
  pub steps: Vec<StepDefinition>,
  #[serde(default)]
  pub edges: Vec<EdgeDefinition>,
  #[serde(default)]
  pub branches: Vec<BranchDefinition>,
}

/// A nested sub-flow owned by `controller`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDefinition {
  pub controller: StepId,
  #[serde(flatten)]
  pub graph: GraphDefinition,
}

/// Orchestration structure plus the pointers recorded against it, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestrationSnapshot {
  pub graph: GraphDefinition,
  #[serde(default)]
  pub pointers: Vec<ExecutionPointer>,
}
