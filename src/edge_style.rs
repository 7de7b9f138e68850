//! Per-edge styling: label and highlight color.

use crate::color::GraphvizColor;
use crate::types::Edge;

/// Computed style of one edge. `color` applies to both stroke and font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStyle {
  pub label: String,
  pub color: GraphvizColor,
}

/// True for a transition from a branch-owning step into a starting step.
pub fn is_branch_entry_edge(edge: &Edge) -> bool {
  !edge.from.step.branches.is_empty() && edge.to.step.is_starting_step
}

pub fn style_edge(edge: &Edge) -> EdgeStyle {
  let color = if is_branch_entry_edge(edge) {
    GraphvizColor::Purple
  } else {
    GraphvizColor::Black
  };
  EdgeStyle {
    label: format!(" {}", edge.title),
    color,
  }
}
