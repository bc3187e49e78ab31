//! Struct definitions and implementations for objects that represent
//! vertices in a graph.
//!
//! A [`Node`] is a point on the plane plus the bookkeeping a search
//! leaves behind on it. The bookkeeping lives in [`SearchState`] so the
//! whole of it can be reset in one assignment between searches.
//!
//! Nodes never hold references to other nodes. Adjacency is owned by
//! the [`Graph`](crate::graph::Graph) and the `parent` back-reference is
//! a [`NodeIndex`], a plain handle into the graph's node table.

use petgraph::stable_graph::NodeIndex;
use uuid::Uuid;

use super::point::Point;
use super::status::Status;

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// Per-node scores and links written by a search.
///
/// Scores start at [`f32::INFINITY`] so that any finite tentative cost
/// is an improvement over an unvisited node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchState {
    /// Where the node stands in the current search.
    ///
    /// See also [`Status`].
    pub status: Status,

    /// Cost of the best known path from the start node (`g`).
    pub cost_so_far: f32,

    /// Straight-line estimate of the remaining distance to the goal (`h`).
    pub heuristic: f32,

    /// `cost_so_far + heuristic` (`f`), the frontier priority.
    pub total_priority: f32,

    /// The node this one was reached from on the best known path.
    pub parent: Option<NodeIndex>,
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState {
            status: Status::Unvisited,
            cost_so_far: f32::INFINITY,
            heuristic: f32::INFINITY,
            total_priority: f32::INFINITY,
            parent: None,
        }
    }
}

impl SearchState {
    /// Returns true if the current search has expanded this node.
    pub fn is_closed(&self) -> bool {
        self.status == Status::Closed
    }
}

/// Represent a vertex in a graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Random identifier assigned on insertion.
    ///
    /// Node indices are recycled by the graph after a removal, so a
    /// caller that keeps a [`NodeIndex`] across edits can compare uids
    /// to tell whether the slot still holds the same node.
    pub uid: Uuid,

    /// Denotes the position of the node on the plane.
    ///
    /// See also [`Point`].
    pub position: Point,

    /// Scores and parent link left by the last search.
    pub search: SearchState,
}

impl Node {
    /// Creates an unvisited node at `position` with a fresh uid.
    pub fn new(position: Point) -> Node {
        Node {
            uid: Uuid::new_v4(),
            position,
            search: SearchState::default(),
        }
    }

    /// Distance from this node to another.
    pub fn distance_to(&self, other: &Node) -> f32 {
        self.position.distance_to(&other.position)
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod node_type_tests {
    use super::*;

    #[test]
    fn test_new_node_is_unvisited() {
        let node = Node::new(Point::new(1.0, 2.0));
        assert_eq!(node.search.status, Status::Unvisited);
        assert!(node.search.cost_so_far.is_infinite());
        assert!(node.search.total_priority.is_infinite());
        assert_eq!(node.search.parent, None);
        assert!(!node.search.is_closed());
    }

    /// Two nodes at the same position are still distinct nodes.
    #[test]
    fn test_uids_are_unique() {
        let a = Node::new(Point::new(5.0, 5.0));
        let b = Node::new(Point::new(5.0, 5.0));
        assert_ne!(a.uid, b.uid);
        assert_eq!(a.distance_to(&b), 0.0);
    }
}
