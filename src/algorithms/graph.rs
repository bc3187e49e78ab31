//! Defines the graph and associated functions.
//!
//! Uses a [`StableUnGraph`] to store nodes and their undirected
//! adjacency. A stable graph keeps every [`NodeIndex`] valid when other
//! nodes are removed, which lets indices double as the non-owning
//! `parent` links written by a search.
//!
//! The graph is the only place adjacency is mutated. Every mutation
//! keeps the two invariants below:
//! * adjacency is symmetric, since each edge is stored once and read
//!   from both ends;
//! * no node is its own neighbor and no pair is connected twice.

use petgraph::stable_graph::{NodeIndex, StableUnGraph};

use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::node::{Node, SearchState};
use crate::point::Point;
use crate::search::{PathSearch, SearchResult};

/// Represents an undirected graph of points on a plane.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: StableUnGraph<Node, ()>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Creates and inserts a new node at `position`.
    ///
    /// No separation is enforced: two nodes may share a position.
    pub fn add_node(&mut self, position: Point) -> NodeIndex {
        let index = self.inner.add_node(Node::new(position));
        debug!("added node {:?} at {:?}", index, position);
        index
    }

    /// Creates and inserts a new node at `position` unless another node
    /// lies closer than `min_separation`.
    ///
    /// # Errors
    /// [`Error::DuplicatePosition`] if the position is too crowded. The
    /// graph is left unchanged.
    pub fn add_node_separated(&mut self, position: Point, min_separation: f32) -> Result<NodeIndex> {
        match self.closest_distance(&position) {
            Some(distance) if distance < min_separation => Err(Error::DuplicatePosition {
                x: position.x,
                y: position.y,
                min_separation,
            }),
            _ => Ok(self.add_node(position)),
        }
    }

    /// Removes `node` and every edge touching it.
    ///
    /// Returns the removed node. Its index may be handed out again by a
    /// later [`add_node`](Self::add_node).
    pub fn remove_node(&mut self, node: NodeIndex) -> Result<Node> {
        let removed = self.inner.remove_node(node).ok_or(Error::NodeNotFound(node))?;
        debug!("removed node {:?}", node);

        // Parent links are plain indices, so a link to the removed node
        // would dangle or, worse, point at whatever reuses the slot.
        for index in self.node_indices() {
            let search = &mut self.inner[index].search;
            if search.parent == Some(node) {
                search.parent = None;
            }
        }
        Ok(removed)
    }

    /// Connects `a` and `b`.
    ///
    /// Connecting a pair that is already connected leaves the graph as it
    /// is; no duplicate edge is created.
    ///
    /// # Errors
    /// [`Error::NodeNotFound`] for an unknown node and [`Error::SelfLoop`]
    /// when `a == b`.
    pub fn connect(&mut self, a: NodeIndex, b: NodeIndex) -> Result<()> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        if a == b {
            return Err(Error::SelfLoop(a));
        }
        if self.inner.find_edge(a, b).is_none() {
            self.inner.add_edge(a, b, ());
            debug!("connected {:?} and {:?}", a, b);
        }
        Ok(())
    }

    /// Removes the edge between `a` and `b`.
    ///
    /// # Errors
    /// [`Error::EdgeNotFound`] when the pair is not connected, so calling
    /// this twice has no further effect after the first call.
    /// [`Error::NodeNotFound`] for an unknown node.
    pub fn disconnect(&mut self, a: NodeIndex, b: NodeIndex) -> Result<()> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        let edge = self
            .inner
            .find_edge(a, b)
            .ok_or(Error::EdgeNotFound { a, b })?;
        self.inner.remove_edge(edge);
        debug!("disconnected {:?} and {:?}", a, b);
        Ok(())
    }

    /// Connects the pair if it is not connected, disconnects it otherwise.
    ///
    /// # Returns
    /// `true` if the nodes are connected after the call.
    pub fn toggle_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Result<bool> {
        if self.are_connected(a, b) {
            self.disconnect(a, b)?;
            Ok(false)
        } else {
            self.connect(a, b)?;
            Ok(true)
        }
    }

    /// Returns true if an edge joins `a` and `b`.
    pub fn are_connected(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.inner.find_edge(a, b).is_some()
    }

    /// Removes every edge. Nodes are kept.
    pub fn clear_edges(&mut self) {
        self.inner.clear_edges();
        debug!("cleared all edges");
    }

    /// Places `node` at a new position. Edges follow the node.
    pub fn move_node(&mut self, node: NodeIndex, position: Point) -> Result<()> {
        let weight = self
            .inner
            .node_weight_mut(node)
            .ok_or(Error::NodeNotFound(node))?;
        weight.position = position;
        Ok(())
    }

    /// Finds the node nearest to `point` among those within `radius`.
    pub fn node_at(&self, point: &Point, radius: f32) -> Option<NodeIndex> {
        self.inner
            .node_indices()
            .map(|index| (index, self.inner[index].position.distance_to(point)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|(_, x), (_, y)| x.total_cmp(y))
            .map(|(index, _)| index)
    }

    /// Distance from `point` to the nearest node, [`None`] on an empty
    /// graph.
    pub fn closest_distance(&self, point: &Point) -> Option<f32> {
        self.inner
            .node_indices()
            .map(|index| self.inner[index].position.distance_to(point))
            .min_by(|x, y| x.total_cmp(y))
    }

    /// Iterates over the neighbors of `node`. Unknown nodes have none.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.inner.neighbors(node)
    }

    /// Returns true if `node` is in the graph.
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.inner.contains_node(node)
    }

    /// Get the node behind an index.
    pub fn node(&self, node: NodeIndex) -> Option<&Node> {
        self.inner.node_weight(node)
    }

    pub(crate) fn node_mut(&mut self, node: NodeIndex) -> Option<&mut Node> {
        self.inner.node_weight_mut(node)
    }

    /// Get the position of a node.
    pub fn position(&self, node: NodeIndex) -> Option<Point> {
        self.node(node).map(|n| n.position)
    }

    /// Distance between two nodes, [`None`] if either is missing.
    pub fn distance(&self, a: NodeIndex, b: NodeIndex) -> Option<f32> {
        Some(self.node(a)?.distance_to(self.node(b)?))
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Return the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Indices of all nodes, in index order.
    pub fn node_indices(&self) -> Vec<NodeIndex> {
        self.inner.node_indices().collect()
    }

    /// Get all the edges in the graph, each reported once.
    pub fn edges(&self) -> Vec<Edge> {
        self.inner
            .edge_indices()
            .filter_map(|edge| self.inner.edge_endpoints(edge))
            .map(|(a, b)| Edge {
                a,
                b,
                length: self.inner[a].distance_to(&self.inner[b]),
            })
            .collect()
    }

    /// Returns every node to [`Status::Unvisited`](crate::status::Status)
    /// with no scores and no parent.
    pub fn reset_search_state(&mut self) {
        for index in self.node_indices() {
            self.inner[index].search = SearchState::default();
        }
    }

    /// Finds the shortest path between two nodes.
    ///
    /// Runs a [`PathSearch`] to completion without an observer.
    ///
    /// # Returns
    /// The path, or [`SearchResult::Unreachable`] if the nodes are not in
    /// the same connected component.
    ///
    /// # Errors
    /// [`Error::NodeNotFound`] if either node is not in the graph.
    pub fn shortest_path(&mut self, start: NodeIndex, end: NodeIndex) -> Result<SearchResult> {
        Ok(PathSearch::new(self, start, end)?.run(&mut ()))
    }

    //---------------------------------------------------------------
    // Private functions
    //---------------------------------------------------------------

    fn ensure_node(&self, node: NodeIndex) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::NodeNotFound(node))
        }
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;
    use crate::status::Status;

    fn triangle() -> (Graph, NodeIndex, NodeIndex, NodeIndex) {
        let mut graph = Graph::new();
        let a = graph.add_node(Point::new(0.0, 0.0));
        let b = graph.add_node(Point::new(10.0, 0.0));
        let c = graph.add_node(Point::new(0.0, 10.0));
        (graph, a, b, c)
    }

    fn sorted_neighbors(graph: &Graph, node: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<_> = graph.neighbors(node).collect();
        neighbors.sort();
        neighbors
    }

    #[test]
    fn test_connect_is_symmetric() {
        let (mut graph, a, b, _) = triangle();
        graph.connect(a, b).unwrap();
        assert_eq!(sorted_neighbors(&graph, a), vec![b]);
        assert_eq!(sorted_neighbors(&graph, b), vec![a]);
        assert!(graph.are_connected(b, a));
    }

    #[test]
    fn test_connect_twice_does_not_duplicate() {
        let (mut graph, a, b, _) = triangle();
        graph.connect(a, b).unwrap();
        graph.connect(b, a).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(a).count(), 1);
    }

    #[test]
    fn test_self_loop_rejected() {
        let (mut graph, a, _, _) = triangle();
        assert_eq!(graph.connect(a, a), Err(Error::SelfLoop(a)));
        assert_eq!(graph.edge_count(), 0);
    }

    /// connect followed by disconnect restores the previous adjacency.
    #[test]
    fn test_connect_disconnect_round_trip() {
        let (mut graph, a, b, c) = triangle();
        graph.connect(a, c).unwrap();
        let before: Vec<_> = [a, b, c]
            .iter()
            .map(|n| sorted_neighbors(&graph, *n))
            .collect();

        graph.connect(a, b).unwrap();
        graph.disconnect(a, b).unwrap();

        let after: Vec<_> = [a, b, c]
            .iter()
            .map(|n| sorted_neighbors(&graph, *n))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_disconnect_twice_has_no_further_effect() {
        let (mut graph, a, b, c) = triangle();
        graph.connect(a, b).unwrap();
        graph.connect(b, c).unwrap();

        assert_eq!(graph.disconnect(a, b), Ok(()));
        assert_eq!(graph.disconnect(a, b), Err(Error::EdgeNotFound { a, b }));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.are_connected(b, c));
    }

    #[test]
    fn test_toggle_edge() {
        let (mut graph, a, b, _) = triangle();
        assert_eq!(graph.toggle_edge(a, b), Ok(true));
        assert!(graph.are_connected(a, b));
        assert_eq!(graph.toggle_edge(b, a), Ok(false));
        assert!(!graph.are_connected(a, b));
    }

    #[test]
    fn test_remove_node_strips_adjacency() {
        let (mut graph, a, b, c) = triangle();
        graph.connect(a, b).unwrap();
        graph.connect(a, c).unwrap();
        graph.connect(b, c).unwrap();

        graph.remove_node(a).unwrap();

        assert!(!graph.contains(a));
        assert_eq!(graph.node_count(), 2);
        for node in graph.node_indices() {
            assert!(graph.neighbors(node).all(|n| n != a));
        }
        assert!(graph.edges().iter().all(|e| !e.touches(a)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_node_clears_parent_links() {
        let (mut graph, a, b, _) = triangle();
        graph.connect(a, b).unwrap();
        graph.node_mut(b).unwrap().search.parent = Some(a);
        graph.remove_node(a).unwrap();
        assert_eq!(graph.node(b).unwrap().search.parent, None);
    }

    #[test]
    fn test_unknown_node_errors() {
        let (mut graph, a, b, _) = triangle();
        graph.remove_node(b).unwrap();
        assert_eq!(graph.connect(a, b), Err(Error::NodeNotFound(b)));
        assert_eq!(graph.disconnect(a, b), Err(Error::NodeNotFound(b)));
        assert!(graph.remove_node(b).is_err());
        assert!(graph.move_node(b, Point::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn test_clear_edges_keeps_nodes() {
        let (mut graph, a, b, c) = triangle();
        graph.connect(a, b).unwrap();
        graph.connect(b, c).unwrap();
        graph.clear_edges();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.neighbors(b).count(), 0);
    }

    #[test]
    fn test_add_node_separated() {
        let mut graph = Graph::new();
        graph.add_node(Point::new(0.0, 0.0));
        assert!(matches!(
            graph.add_node_separated(Point::new(3.0, 4.0), 10.0),
            Err(Error::DuplicatePosition { .. })
        ));
        assert_eq!(graph.node_count(), 1);
        assert!(graph.add_node_separated(Point::new(6.0, 8.0), 10.0).is_ok());
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_node_at_picks_nearest_within_radius() {
        let (graph, a, b, _) = triangle();
        assert_eq!(graph.node_at(&Point::new(1.0, 1.0), 5.0), Some(a));
        assert_eq!(graph.node_at(&Point::new(8.0, 0.0), 5.0), Some(b));
        assert_eq!(graph.node_at(&Point::new(5.0, 5.0), 5.0), None);
        assert_eq!(Graph::new().closest_distance(&Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_move_node_updates_edge_length() {
        let (mut graph, a, b, _) = triangle();
        graph.connect(a, b).unwrap();
        assert_eq!(graph.edges()[0].length, 10.0);
        graph.move_node(b, Point::new(3.0, 4.0)).unwrap();
        assert_eq!(graph.edges()[0].length, 5.0);
        assert_eq!(graph.position(b), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_reset_search_state() {
        let (mut graph, a, b, _) = triangle();
        graph.connect(a, b).unwrap();
        graph.shortest_path(a, b).unwrap();
        assert_eq!(graph.node(b).unwrap().search.status, Status::Closed);

        graph.reset_search_state();
        for node in graph.node_indices() {
            assert_eq!(graph.node(node).unwrap().search, SearchState::default());
        }
    }
}
