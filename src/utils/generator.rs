//! Generates random graphs.
//!
//! Nodes are scattered uniformly inside the padded area, resampling any
//! position that lands too close to an existing node. Edges are then
//! drawn with a probability that falls off with distance, see
//! [`random_edges`].

use petgraph::stable_graph::NodeIndex;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::point::Point;
use crate::utils::graph::random_edges;

/// A generated graph and its two designated nodes.
#[derive(Debug, Clone)]
pub struct Scene {
    pub graph: Graph,
    /// Placed in the top left corner, inside the padding.
    pub start: NodeIndex,
    /// Placed in the bottom right corner, inside the padding.
    pub end: NodeIndex,
}

/// Populates graphs with randomly placed nodes and random edges.
#[derive(Debug, Copy, Clone)]
pub struct RandomGraphGenerator {
    config: GeneratorConfig,
}

impl RandomGraphGenerator {
    /// Creates a generator after validating `config`.
    pub fn new(config: GeneratorConfig) -> Result<RandomGraphGenerator> {
        config.validate()?;
        Ok(RandomGraphGenerator { config })
    }

    /// The settings in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Position of the start node of a generated scene.
    pub fn start_position(&self) -> Point {
        Point::new(self.config.padding, self.config.height - self.config.padding)
    }

    /// Position of the end node of a generated scene.
    pub fn end_position(&self) -> Point {
        Point::new(self.config.width - self.config.padding, self.config.padding)
    }

    /// Builds a fresh scene: start and end at opposite corners, then
    /// `node_count - 2` random nodes, then random edges.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Scene> {
        info!("[1/3] Placing start and end nodes...");
        let mut graph = Graph::new();
        let start = graph.add_node(self.start_position());
        let end = graph.add_node(self.end_position());

        info!("[2/3] Placing {} random nodes...", self.config.node_count - 2);
        self.place_nodes(&mut graph, self.config.node_count - 2, rng)?;

        info!("[3/3] Building random edges...");
        let edges = self.random_edges(&mut graph, rng);

        info!(
            "Generated graph with {} nodes and {} edges",
            graph.node_count(),
            edges
        );
        Ok(Scene { graph, start, end })
    }

    /// Places one node at a random position at least `min_separation`
    /// away from every node already in `graph`.
    ///
    /// Crowded samples are rejected and redrawn, up to
    /// `max_placement_attempts` times.
    ///
    /// # Errors
    /// [`Error::PlacementExhausted`] when every attempt was rejected.
    pub fn place_node<R: Rng>(&self, graph: &mut Graph, rng: &mut R) -> Result<NodeIndex> {
        for _ in 0..self.config.max_placement_attempts {
            match graph.add_node_separated(self.sample_position(rng), self.config.min_separation) {
                Ok(index) => return Ok(index),
                Err(Error::DuplicatePosition { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        warn!(
            "no free position found after {} attempts",
            self.config.max_placement_attempts
        );
        Err(Error::PlacementExhausted {
            placed: 0,
            requested: 1,
        })
    }

    /// Places `count` nodes with [`place_node`](Self::place_node).
    ///
    /// Nodes placed before a failure stay in the graph.
    pub fn place_nodes<R: Rng>(
        &self,
        graph: &mut Graph,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<NodeIndex>> {
        let mut placed = Vec::with_capacity(count);
        for _ in 0..count {
            match self.place_node(graph, rng) {
                Ok(index) => placed.push(index),
                Err(Error::PlacementExhausted { .. }) => {
                    return Err(Error::PlacementExhausted {
                        placed: placed.len(),
                        requested: count,
                    })
                }
                Err(e) => return Err(e),
            }
        }
        Ok(placed)
    }

    /// Draws edges over the whole graph with the configured odds constant.
    pub fn random_edges<R: Rng>(&self, graph: &mut Graph, rng: &mut R) -> usize {
        random_edges(graph, self.config.edge_odds_constant, rng)
    }

    fn sample_position<R: Rng>(&self, rng: &mut R) -> Point {
        let GeneratorConfig {
            width,
            height,
            padding,
            ..
        } = self.config;
        Point::new(
            rng.gen_range(padding..=width - padding),
            rng.gen_range(padding..=height - padding),
        )
    }
}
