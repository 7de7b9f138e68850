//! Renderer interface and the Graphviz DOT implementation.
//!
//! The renderer only serializes what it is handed: vertex and edge styles are
//! computed beforehand by the emitter (see [`crate::visualizer`]).

use std::fmt::Write;

use crate::cluster_graph::{ClusterId, ClusteredGraph, ROOT_CLUSTER};
use crate::color::GraphvizColor;
use crate::edge_style::EdgeStyle;
use crate::error::{Result, VisualizerError};
use crate::render_options::RankDir;
use crate::vertex_style::VertexStyle;

/// Style shared by every branch cluster. Clusters carry no visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterStyle {
  pub background: GraphvizColor,
}

/// A clustered graph with one style per vertex and per edge, index-aligned
/// with [`ClusteredGraph::vertices`] and [`ClusteredGraph::edges`].
#[derive(Debug, Clone)]
pub struct StyledGraph<'a> {
  pub name: &'a str,
  pub rank_dir: Option<RankDir>,
  pub graph: &'a ClusteredGraph,
  pub vertex_styles: Vec<VertexStyle>,
  pub edge_styles: Vec<EdgeStyle>,
  pub cluster_style: ClusterStyle,
}

/// Turns a styled graph into a textual diagram description.
pub trait GraphRenderer {
  fn render(&self, styled: &StyledGraph<'_>) -> Result<String>;
}

/// Renders Graphviz DOT. Vertex ids are their index in the flattened graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

impl GraphRenderer for DotRenderer {
  fn render(&self, styled: &StyledGraph<'_>) -> Result<String> {
    let graph = styled.graph;
    if styled.vertex_styles.len() != graph.vertex_count()
      || styled.edge_styles.len() != graph.edge_count()
    {
      return Err(VisualizerError::InvalidArgument(format!(
        "style count mismatch: {} vertex styles for {} vertices, {} edge styles for {} edges",
        styled.vertex_styles.len(),
        graph.vertex_count(),
        styled.edge_styles.len(),
        graph.edge_count()
      )));
    }

    let mut out = String::new();
    writeln!(out, "digraph \"{}\" {{", escape_dot(styled.name))?;
    if let Some(dir) = styled.rank_dir {
      writeln!(out, "  rankdir={dir};")?;
    }
    // Vertices (nested per cluster) go first so that edges crossing cluster
    // boundaries never pull a vertex into the wrong subgraph.
    write_cluster(&mut out, styled, ROOT_CLUSTER, 1)?;
    for (e, style) in graph.edges().iter().zip(&styled.edge_styles) {
      writeln!(
        out,
        "  {} -> {} [label=\"{}\", color={}, fontcolor={}];",
        e.from,
        e.to,
        escape_dot(&style.label),
        style.color,
        style.color
      )?;
    }
    out.push_str("}\n");
    Ok(out)
  }
}

fn write_cluster(
  out: &mut String,
  styled: &StyledGraph<'_>,
  id: ClusterId,
  depth: usize,
) -> Result<()> {
  let cluster = styled.graph.cluster(id).ok_or_else(|| {
    VisualizerError::InvalidArgument(format!("cluster {id} is not part of the graph"))
  })?;
  let mut depth = depth;
  if id != ROOT_CLUSTER {
    let indent = "  ".repeat(depth);
    writeln!(out, "{indent}subgraph cluster_{id} {{")?;
    writeln!(out, "{indent}  style=filled;")?;
    writeln!(out, "{indent}  fillcolor={};", styled.cluster_style.background)?;
    writeln!(out, "{indent}  label=\"\";")?;
    depth += 1;
  }
  let indent = "  ".repeat(depth);
  for &v in &cluster.vertices {
    let s = &styled.vertex_styles[v];
    writeln!(
      out,
      "{indent}{v} [label=\"{}\", shape={}, style=filled, fillcolor={}, color={}, fontcolor={}];",
      escape_dot(&s.label),
      s.shape.dot_name(),
      s.fill_color,
      s.outline_color,
      s.font_color
    )?;
  }
  for &child in &cluster.children {
    write_cluster(out, styled, child, depth)?;
  }
  if id != ROOT_CLUSTER {
    writeln!(out, "{}}}", "  ".repeat(depth - 1))?;
  }
  Ok(())
}

/// Escapes a string for a quoted DOT attribute value.
pub(crate) fn escape_dot(s: &str) -> String {
  s.replace('\\', "\\\\")
    .replace('"', "\\\"")
    .replace('\n', "\\n")
}
