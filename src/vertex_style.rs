//! Per-vertex styling: shape, colors, and label with the visit-order badge.

use tracing::instrument;

use crate::color::GraphvizColor;
use crate::pointer_group::{ExecutionPointerColor, PointerGroup};
use crate::types::{Vertex, VertexKind};

/// Entries per badge line.
const BADGE_CHUNK: usize = 3;

/// Graphviz node shapes used for vertex kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexShape {
  Octagon,
  Ellipse,
  Diamond,
  House,
  Rectangle,
}

impl VertexShape {
  pub fn dot_name(self) -> &'static str {
    match self {
      VertexShape::Octagon => "octagon",
      VertexShape::Ellipse => "ellipse",
      VertexShape::Diamond => "diamond",
      VertexShape::House => "house",
      VertexShape::Rectangle => "rectangle",
    }
  }
}

/// Computed style of one vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexStyle {
  pub shape: VertexShape,
  pub fill_color: GraphvizColor,
  pub outline_color: GraphvizColor,
  pub font_color: GraphvizColor,
  pub label: String,
}

/// Formats visit orders as `#1. #2. #3.` lines of three, prefixed by a newline.
///
/// A line break follows every third entry unless it is the last one overall.
/// Returns an empty string for no orders.
pub fn format_badge(orders: &[usize]) -> String {
  let Some(last) = orders.len().checked_sub(1) else {
    return String::new();
  };
  let mut badge = String::from("\n");
  for (i, order) in orders.iter().enumerate() {
    let pos = i % BADGE_CHUNK;
    if pos != 0 {
      badge.push(' ');
    }
    badge.push_str(&format!("#{order}."));
    if pos == BADGE_CHUNK - 1 && i != last {
      badge.push('\n');
    }
  }
  badge
}

/// Fill color and badge for a vertex visited by `entries`.
fn overlay(entries: Option<&[ExecutionPointerColor]>) -> (GraphvizColor, String) {
  let Some(entries) = entries else {
    return (GraphvizColor::Transparent, String::new());
  };
  let fill = entries
    .iter()
    .max_by_key(|e| e.order())
    .map(ExecutionPointerColor::color)
    .unwrap_or(GraphvizColor::Transparent);
  let mut orders: Vec<usize> = entries.iter().map(ExecutionPointerColor::order).collect();
  orders.sort_unstable();
  (fill, format_badge(&orders))
}

/// Shape plus outline/font color for a vertex kind with the given fill.
fn kind_style(kind: VertexKind, fill: GraphvizColor) -> (VertexShape, GraphvizColor) {
  match kind {
    VertexKind::Root => (VertexShape::Octagon, GraphvizColor::Green),
    VertexKind::BranchEntry => (VertexShape::Ellipse, GraphvizColor::Blue),
    VertexKind::BranchController => {
      let outline = match fill {
        GraphvizColor::LightGreen | GraphvizColor::Transparent => GraphvizColor::Purple,
        _ => GraphvizColor::Black,
      };
      (VertexShape::Diamond, outline)
    }
    VertexKind::End => (VertexShape::House, GraphvizColor::Green),
    VertexKind::Default => (VertexShape::Rectangle, GraphvizColor::Black),
  }
}

/// Styles `vertex`, overlaying the pointers recorded against its step.
#[instrument(level = "trace", skip(vertex, pointers), fields(step = %vertex.step.name))]
pub fn style_vertex(vertex: &Vertex, pointers: &PointerGroup) -> VertexStyle {
  let (fill_color, badge) = overlay(pointers.get(&vertex.id()));
  let controller = vertex
    .step
    .branch_controller
    .as_ref()
    .map(|c| format!(" ({})", c.name))
    .unwrap_or_default();
  let label = format!("{}{}{}", vertex.step.name, controller, badge);
  let (shape, outline) = kind_style(vertex.kind, fill_color);
  VertexStyle {
    shape,
    fill_color,
    outline_color: outline,
    font_color: outline,
    label,
  }
}
