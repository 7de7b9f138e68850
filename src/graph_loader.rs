//! Resolves a serialized [`GraphDefinition`] into an [`OrchestrationGraph`].
//!
//! Branch relationships are declared once per branch (`controller`); the
//! loader derives each step's `branch_controller` and `branches` from them,
//! then classifies every vertex.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::{Result, VisualizerError};
use crate::types::{
  Edge, GraphDefinition, OrchestrationGraph, Step, StepBranch, StepDefinition, StepId, StepRef,
  Vertex, VertexKind,
};

/// Branch relationships collected from the definition tree.
#[derive(Default)]
struct BranchIndex {
  controller_of: HashMap<StepId, StepId>,
  branches_of: HashMap<StepId, Vec<StepBranch>>,
}

fn collect_steps<'a>(
  def: &'a GraphDefinition,
  steps: &mut HashMap<StepId, &'a StepDefinition>,
) -> Result<()> {
  for s in &def.steps {
    if steps.insert(s.id, s).is_some() {
      return Err(VisualizerError::DuplicateStep(s.id));
    }
  }
  for b in &def.branches {
    collect_steps(&b.graph, steps)?;
  }
  Ok(())
}

fn collect_branches(
  def: &GraphDefinition,
  steps: &HashMap<StepId, &StepDefinition>,
  index: &mut BranchIndex,
) -> Result<()> {
  for b in &def.branches {
    if !steps.contains_key(&b.controller) {
      return Err(VisualizerError::UnknownStep(b.controller));
    }
    let branch = StepBranch {
      steps: b
        .graph
        .steps
        .iter()
        .map(|s| StepRef {
          id: s.id,
          name: s.name.clone(),
        })
        .collect(),
    };
    index
      .branches_of
      .entry(b.controller)
      .or_default()
      .push(branch);
    for s in b.graph.steps.iter().filter(|s| s.is_starting_step) {
      index.controller_of.insert(s.id, b.controller);
    }
    collect_branches(&b.graph, steps, index)?;
  }
  Ok(())
}

fn build_step(
  def: &StepDefinition,
  steps: &HashMap<StepId, &StepDefinition>,
  index: &mut BranchIndex,
) -> Step {
  let branch_controller = index.controller_of.get(&def.id).and_then(|c| {
    steps.get(c).map(|cd| StepRef {
      id: cd.id,
      name: cd.name.clone(),
    })
  });
  Step {
    id: def.id,
    name: def.name.clone(),
    is_starting_step: def.is_starting_step,
    branch_controller,
    branches: index.branches_of.remove(&def.id).unwrap_or_default(),
  }
}

/// Depth-first walk over top-level edges that records the edges closing a
/// cycle (their target is still on the current path).
struct CycleWalk<'a> {
  outgoing: &'a HashMap<StepId, Vec<(usize, StepId)>>,
  visited: HashSet<StepId>,
  on_path: HashSet<StepId>,
  back_edges: HashSet<usize>,
}

impl CycleWalk<'_> {
  fn visit(&mut self, id: StepId) {
    self.visited.insert(id);
    self.on_path.insert(id);
    let outgoing = self.outgoing;
    for &(edge, to) in outgoing.get(&id).into_iter().flatten() {
      if self.on_path.contains(&to) {
        self.back_edges.insert(edge);
      } else if !self.visited.contains(&to) {
        self.visit(to);
      }
    }
    self.on_path.remove(&id);
  }
}

/// Indices of top-level edges that loop back, walking from `root` first and
/// then from every unvisited top-level step in declaration order.
fn loop_back_edges(def: &GraphDefinition, root: Option<StepId>) -> HashSet<usize> {
  let mut outgoing: HashMap<StepId, Vec<(usize, StepId)>> = HashMap::new();
  for (i, e) in def.edges.iter().enumerate() {
    outgoing.entry(e.from).or_default().push((i, e.to));
  }
  let mut walk = CycleWalk {
    outgoing: &outgoing,
    visited: HashSet::new(),
    on_path: HashSet::new(),
    back_edges: HashSet::new(),
  };
  for id in root.into_iter().chain(def.steps.iter().map(|s| s.id)) {
    if !walk.visited.contains(&id) {
      walk.visit(id);
    }
  }
  walk.back_edges
}

/// Top-level root and end step ids.
///
/// Root is the first top-level starting step. End steps are the other
/// top-level steps that own no non-empty branch and whose every outgoing
/// top-level edge loops back to a step already on the path from where the
/// walk entered it. A retry edge out of the final step therefore keeps it End.
fn top_level_roles(def: &GraphDefinition, index: &BranchIndex) -> (Option<StepId>, HashSet<StepId>) {
  let root = def.steps.iter().find(|s| s.is_starting_step).map(|s| s.id);
  let back_edges = loop_back_edges(def, root);
  let forks = |id: &StepId| {
    index
      .branches_of
      .get(id)
      .is_some_and(|bs| bs.iter().any(|b| !b.is_empty()))
  };
  let ends = def
    .steps
    .iter()
    .map(|s| s.id)
    .filter(|id| Some(*id) != root && !forks(id))
    .filter(|id| {
      def
        .edges
        .iter()
        .enumerate()
        .all(|(i, e)| e.from != *id || back_edges.contains(&i))
    })
    .collect();
  (root, ends)
}

fn build_level(def: &GraphDefinition, vertices: &HashMap<StepId, Vertex>) -> Result<OrchestrationGraph> {
  let lookup = |id: &StepId| {
    vertices
      .get(id)
      .cloned()
      .ok_or(VisualizerError::UnknownStep(*id))
  };
  let level_vertices = def.steps.iter().map(|s| lookup(&s.id)).collect::<Result<Vec<_>>>()?;
  let edges = def
    .edges
    .iter()
    .map(|e| Ok(Edge::new(lookup(&e.from)?, lookup(&e.to)?, e.title.clone())))
    .collect::<Result<Vec<_>>>()?;
  let branches = def
    .branches
    .iter()
    .map(|b| build_level(&b.graph, vertices))
    .collect::<Result<Vec<_>>>()?;
  Ok(OrchestrationGraph {
    vertices: level_vertices,
    edges,
    branches,
  })
}

/// Builds the orchestration graph described by `def`.
///
/// Fails on a step id declared twice, or on an edge endpoint or branch
/// controller that is not declared anywhere in the tree.
#[instrument(level = "trace", skip(def))]
pub fn load_orchestration_graph(def: &GraphDefinition) -> Result<OrchestrationGraph> {
  let mut step_defs = HashMap::new();
  collect_steps(def, &mut step_defs)?;
  let mut index = BranchIndex::default();
  collect_branches(def, &step_defs, &mut index)?;

  let (root, ends) = top_level_roles(def, &index);

  let mut vertices = HashMap::with_capacity(step_defs.len());
  for (id, sd) in &step_defs {
    let step = build_step(sd, &step_defs, &mut index);
    let is_root = Some(*id) == root;
    let kind = VertexKind::classify(&step, is_root, ends.contains(id));
    vertices.insert(*id, Vertex::new(Arc::new(step), kind));
  }

  let graph = build_level(def, &vertices)?;
  debug!(
    steps = vertices.len(),
    edges = graph.total_edges(),
    "loaded orchestration graph"
  );
  Ok(graph)
}
