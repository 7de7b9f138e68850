//! Orchestration model types consumed by the visualizer.
//!
//! The domain model hands these over read-only; nothing in this crate mutates
//! them.

mod edge;
#[cfg(test)]
mod edge_test;
mod execution_pointer;
mod orchestration_graph;
mod orchestration_snapshot;
mod pointer_status;
mod step;
mod vertex;

pub use edge::Edge;
pub use execution_pointer::ExecutionPointer;
pub use orchestration_graph::OrchestrationGraph;
pub use orchestration_snapshot::{
  BranchDefinition, EdgeDefinition, GraphDefinition, OrchestrationSnapshot, StepDefinition,
};
pub use pointer_status::PointerStatus;
pub use step::{Step, StepBranch, StepId, StepRef};
pub use vertex::{Vertex, VertexKind};
