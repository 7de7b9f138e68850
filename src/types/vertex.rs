//! A graph vertex wrapping one orchestration step.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Step, StepId};

/// Structural role of a vertex; drives its shape and outline color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexKind {
  Root,
  BranchEntry,
  BranchController,
  End,
  Default,
}

impl VertexKind {
  /// Derives the kind from a step's position in the orchestration.
  ///
  /// `is_root` and `is_end` only ever hold for top-level steps.
  pub fn classify(step: &Step, is_root: bool, is_end: bool) -> Self {
    if is_root {
      VertexKind::Root
    } else if is_end {
      VertexKind::End
    } else if step.branch_controller.is_some() {
      VertexKind::BranchEntry
    } else if step.has_nonempty_branch() {
      VertexKind::BranchController
    } else {
      VertexKind::Default
    }
  }
}

/// A graph vertex. Identity is the identity of the wrapped step.
#[derive(Debug, Clone)]
pub struct Vertex {
  pub step: Arc<Step>,
  pub kind: VertexKind,
}

impl Vertex {
  pub fn new(step: impl Into<Arc<Step>>, kind: VertexKind) -> Self {
    Self {
      step: step.into(),
      kind,
    }
  }

  pub fn id(&self) -> StepId {
    self.step.id
  }
}

impl PartialEq for Vertex {
  fn eq(&self, other: &Self) -> bool {
    self.step.id == other.step.id
  }
}

impl Eq for Vertex {}

impl Hash for Vertex {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.step.id.hash(state);
  }
}
