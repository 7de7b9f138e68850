//! Tests for `renderer`.

use uuid::Uuid;

use crate::cluster_graph::build_clustered_graph;
use crate::color::GraphvizColor;
use crate::edge_style::EdgeStyle;
use crate::error::VisualizerError;
use crate::render_options::RankDir;
use crate::renderer::{ClusterStyle, DotRenderer, GraphRenderer, StyledGraph, escape_dot};
use crate::types::{Edge, OrchestrationGraph, Step, Vertex, VertexKind};
use crate::vertex_style::{VertexShape, VertexStyle};

fn vertex(n: u128) -> Vertex {
  Vertex::new(Step::new(Uuid::from_u128(n), format!("s{n}")), VertexKind::Default)
}

fn vstyle(label: &str) -> VertexStyle {
  VertexStyle {
    shape: VertexShape::Rectangle,
    fill_color: GraphvizColor::Transparent,
    outline_color: GraphvizColor::Black,
    font_color: GraphvizColor::Black,
    label: label.to_string(),
  }
}

fn cluster_style() -> ClusterStyle {
  ClusterStyle {
    background: GraphvizColor::WhiteSmoke,
  }
}

#[test]
fn escape_quotes_backslashes_and_newlines() {
  assert_eq!(escape_dot("a\"b"), "a\\\"b");
  assert_eq!(escape_dot("a\\b"), "a\\\\b");
  assert_eq!(escape_dot("A\n#1."), "A\\n#1.");
}

#[test]
fn renders_vertices_edges_and_rankdir() {
  let a = vertex(1);
  let b = vertex(2);
  let g = OrchestrationGraph::new(vec![a.clone(), b.clone()], vec![Edge::new(a, b, "x")]);
  let cg = build_clustered_graph(&g).unwrap();
  let styled = StyledGraph {
    name: "Flow",
    rank_dir: Some(RankDir::LeftRight),
    graph: &cg,
    vertex_styles: vec![vstyle("A\n#1."), vstyle("B")],
    edge_styles: vec![EdgeStyle {
      label: " x".to_string(),
      color: GraphvizColor::Purple,
    }],
    cluster_style: cluster_style(),
  };
  let dot = DotRenderer.render(&styled).unwrap();
  let expected = concat!(
    "digraph \"Flow\" {\n",
    "  rankdir=LR;\n",
    "  0 [label=\"A\\n#1.\", shape=rectangle, style=filled, fillcolor=transparent, color=black, fontcolor=black];\n",
    "  1 [label=\"B\", shape=rectangle, style=filled, fillcolor=transparent, color=black, fontcolor=black];\n",
    "  0 -> 1 [label=\" x\", color=purple, fontcolor=purple];\n",
    "}\n",
  );
  assert_eq!(dot, expected);
}

#[test]
fn clusters_nest_with_background_and_empty_label() {
  let a = vertex(1);
  let b = vertex(2);
  let c = vertex(3);
  let inner = OrchestrationGraph::new(vec![c], vec![]);
  let branch = OrchestrationGraph::new(vec![b], vec![]).with_branch(inner);
  let g = OrchestrationGraph::new(vec![a], vec![]).with_branch(branch);
  let cg = build_clustered_graph(&g).unwrap();
  let styled = StyledGraph {
    name: "G",
    rank_dir: None,
    graph: &cg,
    vertex_styles: vec![vstyle("a"), vstyle("b"), vstyle("c")],
    edge_styles: vec![],
    cluster_style: cluster_style(),
  };
  let dot = DotRenderer.render(&styled).unwrap();
  let expected = concat!(
    "digraph \"G\" {\n",
    "  0 [label=\"a\", shape=rectangle, style=filled, fillcolor=transparent, color=black, fontcolor=black];\n",
    "  subgraph cluster_1 {\n",
    "    style=filled;\n",
    "    fillcolor=whitesmoke;\n",
    "    label=\"\";\n",
    "    1 [label=\"b\", shape=rectangle, style=filled, fillcolor=transparent, color=black, fontcolor=black];\n",
    "    subgraph cluster_2 {\n",
    "      style=filled;\n",
    "      fillcolor=whitesmoke;\n",
    "      label=\"\";\n",
    "      2 [label=\"c\", shape=rectangle, style=filled, fillcolor=transparent, color=black, fontcolor=black];\n",
    "    }\n",
    "  }\n",
    "}\n",
  );
  assert_eq!(dot, expected);
}

#[test]
fn style_count_mismatch_is_an_error() {
  let g = OrchestrationGraph::new(vec![vertex(1)], vec![]);
  let cg = build_clustered_graph(&g).unwrap();
  let styled = StyledGraph {
    name: "G",
    rank_dir: None,
    graph: &cg,
    vertex_styles: vec![],
    edge_styles: vec![],
    cluster_style: cluster_style(),
  };
  assert!(matches!(
    DotRenderer.render(&styled),
    Err(VisualizerError::InvalidArgument(_))
  ));
}

#[test]
fn branch_edges_are_drawn_after_every_cluster() {
  let a = vertex(1);
  let b = vertex(2);
  let c = vertex(3);
  let branch = OrchestrationGraph::new(vec![b.clone(), c.clone()], vec![Edge::new(b, c, "then")]);
  let g = OrchestrationGraph::new(vec![a], vec![]).with_branch(branch);
  let cg = build_clustered_graph(&g).unwrap();
  assert_eq!(cg.edges()[0].cluster, 1);
  let styled = StyledGraph {
    name: "G",
    rank_dir: None,
    graph: &cg,
    vertex_styles: vec![vstyle("a"), vstyle("b"), vstyle("c")],
    edge_styles: vec![EdgeStyle {
      label: " then".to_string(),
      color: GraphvizColor::Black,
    }],
    cluster_style: cluster_style(),
  };
  let dot = DotRenderer.render(&styled).unwrap();
  let lines: Vec<&str> = dot.lines().collect();
  let edge_line = "  1 -> 2 [label=\" then\", color=black, fontcolor=black];";
  let edge_at = lines.iter().position(|l| *l == edge_line).unwrap();
  let cluster_end = lines.iter().rposition(|l| *l == "  }").unwrap();
  assert!(edge_at > cluster_end);
}
