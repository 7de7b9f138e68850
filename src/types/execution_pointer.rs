//! A recorded visit of an orchestration step.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PointerStatus, StepId};

/// A recorded visit of an orchestration step.
///
/// A step revisited on retry has one pointer per visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPointer {
  pub id: Uuid,
  pub step_id: StepId,
  pub status: PointerStatus,
}

impl ExecutionPointer {
  pub fn new(step_id: StepId, status: PointerStatus) -> Self {
    Self {
      id: Uuid::new_v4(),
      step_id,
      status,
    }
  }
}
