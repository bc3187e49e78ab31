//! Error type shared by the graph, search and generator modules.
//!
//! Not finding a path is not an error: see
//! [`SearchResult::Unreachable`](crate::search::SearchResult::Unreachable).

use petgraph::stable_graph::NodeIndex;
use thiserror::Error;

/// Convenient result alias for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The node handle does not refer to a node of the graph, either
    /// because it was never inserted or because it was removed.
    #[error("node {0:?} not found in graph")]
    NodeNotFound(NodeIndex),

    /// Disconnect requested on a pair of nodes that share no edge.
    #[error("no edge between {a:?} and {b:?}")]
    EdgeNotFound { a: NodeIndex, b: NodeIndex },

    /// A node cannot be its own neighbor.
    #[error("refusing to connect node {0:?} to itself")]
    SelfLoop(NodeIndex),

    /// Raised by separated placement when an existing node is closer
    /// than the requested minimum separation.
    #[error("position ({x}, {y}) is within {min_separation} of an existing node")]
    DuplicatePosition {
        x: f32,
        y: f32,
        min_separation: f32,
    },

    /// The frontier was exhausted before the goal was reached.
    #[error("frontier is empty")]
    EmptyFrontier,

    /// Start and end nodes of a session cannot be removed.
    #[error("node {0:?} is a start or end node and cannot be removed")]
    ProtectedNode(NodeIndex),

    /// Random placement gave up after too many rejected samples.
    #[error("placed {placed} of {requested} nodes before running out of attempts")]
    PlacementExhausted { placed: usize, requested: usize },

    /// The generator configuration cannot produce a graph.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}
