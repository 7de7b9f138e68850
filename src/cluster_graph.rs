//! Flattens a nested orchestration into one vertex/edge set plus a cluster tree.
//!
//! Clusters live in an arena indexed by [`ClusterId`]; index 0 is the top
//! level of the orchestration and is not itself drawn as a cluster. Every
//! branch becomes a child cluster of the level that declares it, in
//! declaration order.

use std::collections::HashMap;

use tracing::{info, instrument};

use crate::error::{Result, VisualizerError};
use crate::types::{Edge, OrchestrationGraph, StepId, Vertex};

/// Index of a cluster in [`ClusteredGraph::clusters`].
pub type ClusterId = usize;

/// The top level of the orchestration.
pub const ROOT_CLUSTER: ClusterId = 0;

/// One nesting level: the vertices and edges declared there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cluster {
  pub id: ClusterId,
  pub parent: Option<ClusterId>,
  pub children: Vec<ClusterId>,
  /// Indices into [`ClusteredGraph::vertices`].
  pub vertices: Vec<usize>,
  /// Indices into [`ClusteredGraph::edges`] declared at this level; for
  /// inspection only.
  pub edges: Vec<usize>,
}

/// An edge with its endpoints resolved to vertex indices.
#[derive(Debug, Clone)]
pub struct ClusteredEdge {
  pub edge: Edge,
  pub from: usize,
  pub to: usize,
  /// Level that declared the edge. Kept for inspection only; renderers draw
  /// every edge at the top level.
  pub cluster: ClusterId,
}

/// Flattened orchestration graph with its cluster tree.
#[derive(Debug, Clone)]
pub struct ClusteredGraph {
  vertices: Vec<Vertex>,
  vertex_clusters: Vec<ClusterId>,
  edges: Vec<ClusteredEdge>,
  clusters: Vec<Cluster>,
  index: HashMap<StepId, usize>,
}

impl ClusteredGraph {
  fn empty() -> Self {
    Self {
      vertices: Vec::new(),
      vertex_clusters: Vec::new(),
      edges: Vec::new(),
      clusters: vec![Cluster::default()],
      index: HashMap::new(),
    }
  }

  pub fn vertices(&self) -> &[Vertex] {
    &self.vertices
  }

  pub fn edges(&self) -> &[ClusteredEdge] {
    &self.edges
  }

  /// All clusters including the top level at [`ROOT_CLUSTER`].
  pub fn clusters(&self) -> &[Cluster] {
    &self.clusters
  }

  pub fn cluster(&self, id: ClusterId) -> Option<&Cluster> {
    self.clusters.get(id)
  }

  pub fn vertex_index(&self, step_id: &StepId) -> Option<usize> {
    self.index.get(step_id).copied()
  }

  /// Cluster the vertex at `vertex` was declared in.
  pub fn cluster_of(&self, vertex: usize) -> Option<ClusterId> {
    self.vertex_clusters.get(vertex).copied()
  }

  /// Vertices declared directly in `cluster` (not in its descendants).
  pub fn vertices_in(&self, cluster: ClusterId) -> impl Iterator<Item = &Vertex> + '_ {
    self
      .clusters
      .get(cluster)
      .into_iter()
      .flat_map(move |c| c.vertices.iter().map(move |&i| &self.vertices[i]))
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  /// Number of branch clusters (the top level is not counted).
  pub fn cluster_count(&self) -> usize {
    self.clusters.len() - 1
  }

  fn add_cluster(&mut self, parent: ClusterId) -> ClusterId {
    let id = self.clusters.len();
    self.clusters.push(Cluster {
      id,
      parent: Some(parent),
      ..Cluster::default()
    });
    self.clusters[parent].children.push(id);
    id
  }

  fn add_vertices(&mut self, level: &OrchestrationGraph, cluster: ClusterId) -> Result<()> {
    for v in &level.vertices {
      if self.index.contains_key(&v.id()) {
        return Err(VisualizerError::DuplicateStep(v.id()));
      }
      let idx = self.vertices.len();
      self.index.insert(v.id(), idx);
      self.vertices.push(v.clone());
      self.vertex_clusters.push(cluster);
      self.clusters[cluster].vertices.push(idx);
    }
    for branch in &level.branches {
      let child = self.add_cluster(cluster);
      self.add_vertices(branch, child)?;
    }
    Ok(())
  }

  fn add_edges(&mut self, level: &OrchestrationGraph, cluster: ClusterId) -> Result<()> {
    for e in &level.edges {
      let from = self.resolve(&e.from)?;
      let to = self.resolve(&e.to)?;
      let idx = self.edges.len();
      self.edges.push(ClusteredEdge {
        edge: e.clone(),
        from,
        to,
        cluster,
      });
      self.clusters[cluster].edges.push(idx);
    }
    // Children were created in `branches` order by add_vertices.
    let children = self.clusters[cluster].children.clone();
    for (branch, child) in level.branches.iter().zip(children) {
      self.add_edges(branch, child)?;
    }
    Ok(())
  }

  fn resolve(&self, vertex: &Vertex) -> Result<usize> {
    self
      .vertex_index(&vertex.id())
      .ok_or(VisualizerError::UnknownStep(vertex.id()))
  }
}

/// Flattens `graph` into a [`ClusteredGraph`].
///
/// Vertices are added first across every level so that edges may point into
/// deeper levels (controller → branch entry). Fails on a vertex declared at
/// two levels or an edge whose endpoint is declared nowhere.
#[instrument(level = "trace", skip(graph))]
pub fn build_clustered_graph(graph: &OrchestrationGraph) -> Result<ClusteredGraph> {
  let mut out = ClusteredGraph::empty();
  out.add_vertices(graph, ROOT_CLUSTER)?;
  out.add_edges(graph, ROOT_CLUSTER)?;
  info!(
    vertex_count = out.vertex_count(),
    edge_count = out.edge_count(),
    cluster_count = out.cluster_count(),
    "built clustered graph"
  );
  Ok(out)
}
