//! A directed transition between two vertices.

use super::Vertex;

/// A directed transition between two vertices.
///
/// Parallel edges between the same pair are distinct edges.
#[derive(Debug, Clone)]
pub struct Edge {
  pub from: Vertex,
  pub to: Vertex,
  /// Transition label, e.g. a guard description.
  pub title: String,
}

impl Edge {
  pub fn new(from: Vertex, to: Vertex, title: impl Into<String>) -> Self {
    Self {
      from,
      to,
      title: title.into(),
    }
  }
}
