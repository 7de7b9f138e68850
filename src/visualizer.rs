//! Diagram emitter: ties pointer grouping, graph building, styling and
//! rendering together for one render call.

use tracing::{info, instrument};

use crate::cluster_graph::{ClusteredGraph, build_clustered_graph};
use crate::edge_style::style_edge;
use crate::error::Result;
use crate::graph_loader::load_orchestration_graph;
use crate::pointer_group::PointerGroup;
use crate::render_options::RenderOptions;
use crate::renderer::{ClusterStyle, DotRenderer, GraphRenderer, StyledGraph};
use crate::types::{ExecutionPointer, OrchestrationGraph, OrchestrationSnapshot};
use crate::vertex_style::style_vertex;

/// An orchestration graph with execution pointers overlaid, ready to render.
///
/// Built once per render; holds no references to its inputs.
#[derive(Debug, Clone)]
pub struct OrchestrationVisualizer {
  graph: ClusteredGraph,
  pointers: PointerGroup,
}

impl OrchestrationVisualizer {
  /// Flattens `graph` and numbers `pointers` in the order given.
  ///
  /// An empty `pointers` slice renders the bare structure.
  #[instrument(level = "trace", skip_all)]
  pub fn new(graph: &OrchestrationGraph, pointers: &[ExecutionPointer]) -> Result<Self> {
    let pointers = PointerGroup::from_pointers(pointers);
    let graph = build_clustered_graph(graph)?;
    Ok(Self { graph, pointers })
  }

  pub fn graph(&self) -> &ClusteredGraph {
    &self.graph
  }

  pub fn pointers(&self) -> &PointerGroup {
    &self.pointers
  }

  /// Computes every vertex and edge style.
  pub fn styled<'a>(&'a self, options: &'a RenderOptions) -> Result<StyledGraph<'a>> {
    options.validate()?;
    let vertex_styles = self
      .graph
      .vertices()
      .iter()
      .map(|v| style_vertex(v, &self.pointers))
      .collect();
    let edge_styles = self
      .graph
      .edges()
      .iter()
      .map(|e| style_edge(&e.edge))
      .collect();
    Ok(StyledGraph {
      name: &options.graph_name,
      rank_dir: options.rank_dir,
      graph: &self.graph,
      vertex_styles,
      edge_styles,
      cluster_style: ClusterStyle {
        background: options.cluster_background,
      },
    })
  }

  /// Renders with `renderer`; renderer errors are returned unchanged.
  #[instrument(level = "trace", skip_all, fields(graph = %options.graph_name))]
  pub fn render_with<R>(&self, renderer: &R, options: &RenderOptions) -> Result<String>
  where
    R: GraphRenderer + ?Sized,
  {
    let styled = self.styled(options)?;
    let text = renderer.render(&styled)?;
    info!(
      vertices = self.graph.vertex_count(),
      edges = self.graph.edge_count(),
      clusters = self.graph.cluster_count(),
      pointers = self.pointers.pointer_count(),
      bytes = text.len(),
      "rendered orchestration diagram"
    );
    Ok(text)
  }

  pub fn create_dot_graph(&self, options: &RenderOptions) -> Result<String> {
    self.render_with(&DotRenderer, options)
  }
}

/// Renders `graph` with `pointers` overlaid as Graphviz DOT.
pub fn render_orchestration(
  graph: &OrchestrationGraph,
  pointers: &[ExecutionPointer],
  options: &RenderOptions,
) -> Result<String> {
  OrchestrationVisualizer::new(graph, pointers)?.create_dot_graph(options)
}

/// Resolves a snapshot's structure and renders it with its pointers.
pub fn render_snapshot(snapshot: &OrchestrationSnapshot, options: &RenderOptions) -> Result<String> {
  let graph = load_orchestration_graph(&snapshot.graph)?;
  render_orchestration(&graph, &snapshot.pointers, options)
}
