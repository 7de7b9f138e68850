//! An orchestration step, as handed over by the domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a step.
pub type StepId = Uuid;

/// Lightweight reference to another step (by id, with its display name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRef {
  pub id: StepId,
  pub name: String,
}

/// One nested sub-flow owned by a branch controller step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepBranch {
  pub steps: Vec<StepRef>,
}

impl StepBranch {
  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}

/// An orchestration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
  pub id: StepId,
  pub name: String,
  /// True for the first step of its containing branch (or of the orchestration).
  pub is_starting_step: bool,
  /// Controller owning this step; set only on branch entry steps.
  pub branch_controller: Option<StepRef>,
  /// Sub-flows this step forks into, in declaration order.
  pub branches: Vec<StepBranch>,
}

impl Step {
  /// A plain step with no branch relationships.
  pub fn new(id: StepId, name: impl Into<String>) -> Self {
    Self {
      id,
      name: name.into(),
      is_starting_step: false,
      branch_controller: None,
      branches: Vec::new(),
    }
  }

  pub fn starting(mut self) -> Self {
    self.is_starting_step = true;
    self
  }

  pub fn with_controller(mut self, controller: StepRef) -> Self {
    self.branch_controller = Some(controller);
    self
  }

  pub fn with_branch(mut self, branch: StepBranch) -> Self {
    self.branches.push(branch);
    self
  }

  pub fn to_ref(&self) -> StepRef {
    StepRef {
      id: self.id,
      name: self.name.clone(),
    }
  }

  /// True if any owned branch contains at least one step.
  pub fn has_nonempty_branch(&self) -> bool {
    self.branches.iter().any(|b| !b.is_empty())
  }
}
