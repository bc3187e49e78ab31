//! Stores the state of an editing session.
//!
//! A [`Session`] is what an interactive front end drives: it owns the
//! generated graph, remembers which nodes are the start and the end, and
//! keeps the result of the last search so it can be drawn. Each method
//! maps to one editor action.

use petgraph::stable_graph::NodeIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::generator::{RandomGraphGenerator, Scene};
use crate::graph::Graph;
use crate::point::Point;
use crate::search::{PathSearch, SearchObserver, SearchResult};

/// Graph, endpoints and last search result of one editing session.
#[derive(Debug)]
pub struct Session<R: Rng = StdRng> {
    generator: RandomGraphGenerator,
    scene: Scene,
    rng: R,
    last_result: Option<SearchResult>,
}

impl Session<StdRng> {
    /// Creates a session seeded from system entropy.
    pub fn from_entropy(config: GeneratorConfig) -> Result<Session<StdRng>> {
        Session::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session and generates its first graph.
    pub fn new(config: GeneratorConfig, mut rng: R) -> Result<Session<R>> {
        info!("Initializing session");
        let generator = RandomGraphGenerator::new(config)?;
        let scene = generator.generate(&mut rng)?;
        Ok(Session {
            generator,
            scene,
            rng,
            last_result: None,
        })
    }

    /// Throws the graph away and generates a new one.
    pub fn reset(&mut self) -> Result<()> {
        info!("Resetting session");
        self.scene = self.generator.generate(&mut self.rng)?;
        self.last_result = None;
        Ok(())
    }

    /// Places a node at a random free position.
    pub fn add_random_node(&mut self) -> Result<NodeIndex> {
        let index = self.generator.place_node(&mut self.scene.graph, &mut self.rng)?;
        self.last_result = None;
        Ok(index)
    }

    /// Places a node exactly at `position`, crowded or not.
    pub fn add_node_at(&mut self, position: Point) -> NodeIndex {
        self.last_result = None;
        self.scene.graph.add_node(position)
    }

    /// Removes a node other than the start and end nodes.
    ///
    /// # Errors
    /// [`Error::ProtectedNode`] for the start or end node.
    pub fn remove_node(&mut self, node: NodeIndex) -> Result<()> {
        if node == self.scene.start || node == self.scene.end {
            return Err(Error::ProtectedNode(node));
        }
        self.scene.graph.remove_node(node)?;
        self.last_result = None;
        Ok(())
    }

    /// Connects or disconnects two nodes. Returns true if they end up
    /// connected.
    pub fn toggle_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Result<bool> {
        let connected = self.scene.graph.toggle_edge(a, b)?;
        debug!("toggled edge {:?}-{:?}: connected = {}", a, b, connected);
        self.last_result = None;
        Ok(connected)
    }

    /// Moves a node, start and end included.
    ///
    /// # Errors
    /// [`Error::DuplicatePosition`] when `position` is within the pick
    /// radius of another node. The node stays where it was.
    pub fn move_node(&mut self, node: NodeIndex, position: Point) -> Result<()> {
        let graph = &self.scene.graph;
        if !graph.contains(node) {
            return Err(Error::NodeNotFound(node));
        }
        let radius = self.generator.config().pick_radius;
        let overlaps = graph.node_indices().into_iter().any(|other| {
            other != node
                && graph
                    .position(other)
                    .map_or(false, |p| p.distance_to(&position) <= radius)
        });
        if overlaps {
            debug!("refusing to drop {:?} onto another node", node);
            return Err(Error::DuplicatePosition {
                x: position.x,
                y: position.y,
                min_separation: radius,
            });
        }

        self.scene.graph.move_node(node, position)?;
        self.last_result = None;
        Ok(())
    }

    /// The node under `point`, if any, using the configured pick radius.
    pub fn node_at(&self, point: &Point) -> Option<NodeIndex> {
        self.scene
            .graph
            .node_at(point, self.generator.config().pick_radius)
    }

    /// Removes every edge.
    pub fn clear_edges(&mut self) {
        self.scene.graph.clear_edges();
        self.last_result = None;
    }

    /// Removes every node except the start and end nodes, and leaves
    /// those two unconnected.
    pub fn clear_nodes(&mut self) {
        let Scene { graph, start, end } = &mut self.scene;
        for node in graph.node_indices() {
            if node != *start && node != *end {
                if let Err(e) = graph.remove_node(node) {
                    warn!("failed to remove {:?}: {}", node, e);
                }
            }
        }
        graph.clear_edges();
        info!("Cleared all nodes but start and end");
        self.last_result = None;
    }

    /// Forgets the last search result and its scores.
    pub fn clear_path(&mut self) {
        self.scene.graph.reset_search_state();
        self.last_result = None;
    }

    /// Searches a path from the start node to the end node.
    pub fn find_path(&mut self) -> Result<&SearchResult> {
        self.find_path_with(&mut ())
    }

    /// Like [`find_path`](Self::find_path), calling `observer` as the
    /// search progresses.
    pub fn find_path_with<O: SearchObserver>(&mut self, observer: &mut O) -> Result<&SearchResult> {
        let Scene { graph, start, end } = &mut self.scene;
        let result = PathSearch::new(graph, *start, *end)?.run(observer);
        match &result {
            SearchResult::Found(path) => debug!("path: {:?}", path.nodes),
            SearchResult::Unreachable => {
                info!("There is no path between the start and end nodes.")
            }
        }
        Ok(self.last_result.insert(result))
    }

    /// The graph being edited.
    pub fn graph(&self) -> &Graph {
        &self.scene.graph
    }

    /// The start node.
    pub fn start(&self) -> NodeIndex {
        self.scene.start
    }

    /// The end node.
    pub fn end(&self) -> NodeIndex {
        self.scene.end
    }

    /// Result of the last search, cleared by any edit.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// The settings the session was created with.
    pub fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }
}
