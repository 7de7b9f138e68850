//! # orchestration-visualizer
//!
//! Renders an orchestration's structure, overlaid with its execution
//! pointers, as a Graphviz DOT diagram.
//!
//! ## Pipeline
//!
//! Pointers are numbered and grouped by step ([`pointer_group`]), the nested
//! step/branch tree is flattened into vertices, edges and clusters
//! ([`cluster_graph`]), every vertex and edge is styled ([`vertex_style`],
//! [`edge_style`]) and the result is handed to a [`renderer::GraphRenderer`]
//! ([`visualizer`]).
//!
//! Rendering is pure: no I/O, no shared state, identical inputs give
//! byte-identical output.

pub mod cluster_graph;
pub mod color;
pub mod edge_style;
pub mod error;
pub mod graph_loader;
pub mod pointer_group;
pub mod render_options;
pub mod renderer;
#[cfg(test)]
mod renderer_test;
pub mod snapshot_io;
pub mod types;
pub mod vertex_style;
pub mod visualizer;
#[cfg(test)]
mod visualizer_test;

pub use cluster_graph::{ClusteredGraph, build_clustered_graph};
pub use color::{GraphvizColor, color_for};
pub use error::{Result, VisualizerError};
pub use graph_loader::load_orchestration_graph;
pub use pointer_group::{ExecutionPointerColor, PointerGroup};
pub use render_options::{RankDir, RenderOptions};
pub use renderer::{DotRenderer, GraphRenderer};
pub use types::{ExecutionPointer, OrchestrationGraph, OrchestrationSnapshot, PointerStatus};
pub use visualizer::{OrchestrationVisualizer, render_orchestration, render_snapshot};
