//! Tests for `Edge`.

use uuid::Uuid;

use super::{Edge, Step, Vertex, VertexKind};

#[test]
fn new_keeps_endpoints_and_title() {
  let a = Vertex::new(Step::new(Uuid::from_u128(1), "A"), VertexKind::Root);
  let b = Vertex::new(Step::new(Uuid::from_u128(2), "B"), VertexKind::End);
  let e = Edge::new(a.clone(), b.clone(), "on success");
  assert_eq!(e.from, a);
  assert_eq!(e.to, b);
  assert_eq!(e.title, "on success");
}
