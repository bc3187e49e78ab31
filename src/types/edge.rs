//! Definition of the `Edge` type.
use petgraph::stable_graph::NodeIndex;

/// An undirected connection between two nodes, as reported by
/// [`Graph::edges`](crate::graph::Graph::edges).
///
/// The length is computed from the node positions at the time the edge
/// was listed, so it stays correct after a node is moved.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    /// One end of the edge.
    pub a: NodeIndex,

    /// The other end of the edge.
    pub b: NodeIndex,

    /// Euclidean length of the edge.
    pub length: f32,
}

impl Edge {
    /// Returns true if `node` is one of the edge's endpoints.
    pub fn touches(&self, node: NodeIndex) -> bool {
        self.a == node || self.b == node
    }
}
