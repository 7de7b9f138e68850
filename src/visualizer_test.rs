//! Tests for `visualizer`.

use uuid::Uuid;

use crate::color::GraphvizColor;
use crate::error::{Result, VisualizerError};
use crate::render_options::RenderOptions;
use crate::renderer::{GraphRenderer, StyledGraph};
use crate::types::{
  Edge, ExecutionPointer, OrchestrationGraph, PointerStatus, Step, StepBranch, Vertex, VertexKind,
};
use crate::vertex_style::VertexShape;
use crate::visualizer::{OrchestrationVisualizer, render_orchestration};

fn linear() -> (OrchestrationGraph, Uuid) {
  let a_id = Uuid::from_u128(1);
  let a = Vertex::new(Step::new(a_id, "A").starting(), VertexKind::Root);
  let b = Vertex::new(Step::new(Uuid::from_u128(2), "B"), VertexKind::End);
  let g = OrchestrationGraph::new(
    vec![a.clone(), b.clone()],
    vec![Edge::new(a, b, "next")],
  );
  (g, a_id)
}

/// Renderer that records what it was handed.
struct CountingRenderer;

impl GraphRenderer for CountingRenderer {
  fn render(&self, styled: &StyledGraph<'_>) -> Result<String> {
    Ok(format!(
      "{}:{}:{}",
      styled.vertex_styles.len(),
      styled.edge_styles.len(),
      styled.graph.cluster_count()
    ))
  }
}

struct FailingRenderer;

impl GraphRenderer for FailingRenderer {
  fn render(&self, _styled: &StyledGraph<'_>) -> Result<String> {
    Err(VisualizerError::Render(std::fmt::Error))
  }
}

#[test]
fn linear_without_pointers() {
  let (g, _) = linear();
  let vis = OrchestrationVisualizer::new(&g, &[]).unwrap();
  let options = RenderOptions::default();
  let styled = vis.styled(&options).unwrap();
  assert_eq!(styled.vertex_styles.len(), 2);
  assert_eq!(styled.graph.cluster_count(), 0);

  let a = &styled.vertex_styles[0];
  assert_eq!(a.shape, VertexShape::Octagon);
  assert_eq!(a.outline_color, GraphvizColor::Green);
  assert_eq!(a.fill_color, GraphvizColor::Transparent);
  let b = &styled.vertex_styles[1];
  assert_eq!(b.shape, VertexShape::House);
  assert_eq!(b.outline_color, GraphvizColor::Green);
  assert_eq!(b.fill_color, GraphvizColor::Transparent);

  assert_eq!(styled.edge_styles[0].color, GraphvizColor::Black);
  assert_eq!(styled.edge_styles[0].label, " next");
}

#[test]
fn linear_with_completed_pointer_on_root() {
  let (g, a_id) = linear();
  let ps = vec![ExecutionPointer::new(a_id, PointerStatus::Completed)];
  let vis = OrchestrationVisualizer::new(&g, &ps).unwrap();
  let options = RenderOptions::default();
  let styled = vis.styled(&options).unwrap();
  assert_eq!(styled.vertex_styles[0].fill_color, GraphvizColor::LightGreen);
  assert_eq!(styled.vertex_styles[0].label, "A\n#1.");
  assert_eq!(styled.vertex_styles[1].label, "B");
}

#[test]
fn render_is_deterministic() {
  let (g, a_id) = linear();
  let ps = vec![
    ExecutionPointer::new(a_id, PointerStatus::Retrying),
    ExecutionPointer::new(a_id, PointerStatus::Completed),
  ];
  let options = RenderOptions::default();
  let first = render_orchestration(&g, &ps, &options).unwrap();
  let second = render_orchestration(&g, &ps, &options).unwrap();
  assert_eq!(first, second);
  assert!(first.contains("label=\"A\\n#1. #2.\""));
}

#[test]
fn custom_renderer_receives_all_styles() {
  let fork_id = Uuid::from_u128(5);
  let left = Step::new(Uuid::from_u128(6), "Left").starting();
  let fork = Vertex::new(
    Step::new(fork_id, "Fork")
      .starting()
      .with_branch(StepBranch {
        steps: vec![left.to_ref()],
      }),
    VertexKind::Root,
  );
  let left = Vertex::new(
    left.with_controller(fork.step.to_ref()),
    VertexKind::BranchEntry,
  );
  let g = OrchestrationGraph::new(vec![fork.clone()], vec![Edge::new(fork, left.clone(), "")])
    .with_branch(OrchestrationGraph::new(vec![left], vec![]));
  let vis = OrchestrationVisualizer::new(&g, &[]).unwrap();
  let out = vis
    .render_with(&CountingRenderer, &RenderOptions::default())
    .unwrap();
  assert_eq!(out, "2:1:1");
}

#[test]
fn renderer_errors_propagate_unchanged() {
  let (g, _) = linear();
  let vis = OrchestrationVisualizer::new(&g, &[]).unwrap();
  let err = vis
    .render_with(&FailingRenderer, &RenderOptions::default())
    .unwrap_err();
  assert!(matches!(err, VisualizerError::Render(_)));
}

#[test]
fn invalid_options_fail_before_rendering() {
  let (g, _) = linear();
  let vis = OrchestrationVisualizer::new(&g, &[]).unwrap();
  let err = vis
    .create_dot_graph(&RenderOptions::default().with_graph_name(""))
    .unwrap_err();
  assert!(matches!(err, VisualizerError::InvalidArgument(_)));
}

#[test]
fn pointer_counts_are_exposed() {
  let (g, a_id) = linear();
  let ps = vec![
    ExecutionPointer::new(a_id, PointerStatus::Completed),
    ExecutionPointer::new(Uuid::from_u128(404), PointerStatus::Pending),
  ];
  let vis = OrchestrationVisualizer::new(&g, &ps).unwrap();
  assert_eq!(vis.pointers().pointer_count(), 2);
  assert_eq!(vis.graph().vertex_count(), 2);
}

#[test]
fn cluster_style_follows_options_background() {
  let (g, _) = linear();
  let vis = OrchestrationVisualizer::new(&g, &[]).unwrap();
  let mut options = RenderOptions::default();
  assert_eq!(
    vis.styled(&options).unwrap().cluster_style.background,
    GraphvizColor::WhiteSmoke
  );
  options.cluster_background = GraphvizColor::Blue;
  assert_eq!(
    vis.styled(&options).unwrap().cluster_style.background,
    GraphvizColor::Blue
  );
}
