//! Global ordering of execution pointers and grouping by step.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::color::{GraphvizColor, color_for};
use crate::types::{ExecutionPointer, StepId};

/// An execution pointer with its display color and 1-based visit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPointerColor {
  pointer: ExecutionPointer,
  color: GraphvizColor,
  order: usize,
}

impl ExecutionPointerColor {
  pub fn new(pointer: ExecutionPointer, order: usize) -> Self {
    let color = color_for(pointer.status);
    Self {
      pointer,
      color,
      order,
    }
  }

  pub fn pointer(&self) -> &ExecutionPointer {
    &self.pointer
  }

  pub fn color(&self) -> GraphvizColor {
    self.color
  }

  pub fn order(&self) -> usize {
    self.order
  }
}

/// Execution pointers grouped by the step they visited.
///
/// Orders follow the caller's input sequence, so each group is ascending.
#[derive(Debug, Clone, Default)]
pub struct PointerGroup {
  by_step: HashMap<StepId, Vec<ExecutionPointerColor>>,
}

impl PointerGroup {
  /// Numbers `pointers` 1..=N by position and groups them by step.
  ///
  /// Pointers are never re-sorted or deduplicated.
  #[instrument(level = "trace", skip(pointers))]
  pub fn from_pointers<'a, I>(pointers: I) -> Self
  where
    I: IntoIterator<Item = &'a ExecutionPointer>,
  {
    let by_step = pointers
      .into_iter()
      .enumerate()
      .map(|(i, p)| ExecutionPointerColor::new(p.clone(), i + 1))
      .fold(
        HashMap::<StepId, Vec<ExecutionPointerColor>>::new(),
        |mut acc, epc| {
          acc.entry(epc.pointer.step_id).or_default().push(epc);
          acc
        },
      );
    let group = Self { by_step };
    debug!(
      pointers = group.pointer_count(),
      steps = group.step_count(),
      "grouped execution pointers"
    );
    group
  }

  /// Pointers that visited `step_id`, ascending by order.
  pub fn get(&self, step_id: &StepId) -> Option<&[ExecutionPointerColor]> {
    self
      .by_step
      .get(step_id)
      .map(Vec::as_slice)
      .filter(|entries| !entries.is_empty())
  }

  pub fn is_empty(&self) -> bool {
    self.by_step.is_empty()
  }

  /// Number of distinct steps with at least one pointer.
  pub fn step_count(&self) -> usize {
    self.by_step.len()
  }

  pub fn pointer_count(&self) -> usize {
    self.by_step.values().map(Vec::len).sum()
  }
}
