//! Static structure of an orchestration: one level plus nested branch levels.

use super::{Edge, Vertex};

/// Static structure of an orchestration.
///
/// Each entry of `branches` is the graph of one nested sub-flow. The nesting
/// is a tree; edges within a level may form cycles.
#[derive(Debug, Clone, Default)]
pub struct OrchestrationGraph {
  pub vertices: Vec<Vertex>,
  pub edges: Vec<Edge>,
  pub branches: Vec<OrchestrationGraph>,
}

impl OrchestrationGraph {
  pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
    Self {
      vertices,
      edges,
      branches: Vec::new(),
    }
  }

  pub fn with_branch(mut self, branch: OrchestrationGraph) -> Self {
    self.branches.push(branch);
    self
  }

  /// Vertex count across every nesting level.
  pub fn total_vertices(&self) -> usize {
    self.vertices.len()
      + self
        .branches
        .iter()
        .map(OrchestrationGraph::total_vertices)
        .sum::<usize>()
  }

  /// Edge count across every nesting level.
  pub fn total_edges(&self) -> usize {
    self.edges.len()
      + self
        .branches
        .iter()
        .map(OrchestrationGraph::total_edges)
        .sum::<usize>()
  }
}
