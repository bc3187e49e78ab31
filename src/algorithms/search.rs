//! The search engine.
//!
//! [`PathSearch`] runs a best-first (A*) expansion from a start node to
//! an end node over a [`Graph`], using a [`Frontier`] as the open set and
//! the straight-line distance to the end node as heuristic. Scores and
//! parent links are written onto the nodes themselves so a renderer can
//! show them while the search is running.
//!
//! A search borrows the graph mutably for its whole lifetime. Adding or
//! removing nodes and edges while a search is in progress therefore does
//! not compile. Dropping the search abandons it.

use petgraph::stable_graph::NodeIndex;

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::status::Status;

/// Hooks called while a search runs, typically to redraw.
///
/// Both hooks are side effects only and cannot influence the search.
pub trait SearchObserver {
    /// Called after `node` received a better score and a new parent.
    fn on_relaxed(&mut self, _graph: &Graph, _node: NodeIndex) {}

    /// Called after all neighbors of `node` have been relaxed.
    fn on_expanded(&mut self, _graph: &Graph, _node: NodeIndex) {}
}

/// The no-op observer.
impl SearchObserver for () {}

/// A path from the start node to the end node, both included.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Nodes in travel order.
    pub nodes: Vec<NodeIndex>,

    /// Sum of the edge lengths along the path.
    pub cost: f32,
}

impl Path {
    /// The first node, [`None`] for an empty path.
    pub fn start(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    /// The last node, [`None`] for an empty path.
    pub fn end(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Paths built by a search always hold at least the start node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// A shortest path was found.
    Found(Path),
    /// The end node is not in the start node's connected component.
    Unreachable,
}

impl SearchResult {
    /// Returns the path if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::Unreachable => None,
        }
    }

    /// Returns true for [`SearchResult::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
}

/// Progress reported by [`PathSearch::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The node was expanded and the search goes on.
    Expanded(NodeIndex),
    /// The search is over.
    Done(SearchResult),
}

/// An in-progress search from `start` to `end`.
#[derive(Debug)]
pub struct PathSearch<'g> {
    graph: &'g mut Graph,
    frontier: Frontier,
    start: NodeIndex,
    end: NodeIndex,
    current: NodeIndex,
    outcome: Option<SearchResult>,
}

impl<'g> PathSearch<'g> {
    /// Prepares a search.
    ///
    /// Clears the scores left on the graph by any earlier search, then
    /// scores and closes the start node.
    ///
    /// # Errors
    /// [`Error::NodeNotFound`] if either node is not in the graph.
    pub fn new(graph: &'g mut Graph, start: NodeIndex, end: NodeIndex) -> Result<PathSearch<'g>> {
        let heuristic = graph
            .distance(start, end)
            .ok_or_else(|| missing_node(graph, start, end))?;

        graph.reset_search_state();
        let node = graph.node_mut(start).ok_or(Error::NodeNotFound(start))?;
        node.search.cost_so_far = 0.0;
        node.search.heuristic = heuristic;
        node.search.total_priority = heuristic;
        node.search.status = Status::Closed;

        info!("searching path from {:?} to {:?}", start, end);
        let outcome = (start == end).then(|| {
            SearchResult::Found(Path {
                nodes: vec![start],
                cost: 0.0,
            })
        });

        Ok(PathSearch {
            graph,
            frontier: Frontier::new(),
            start,
            end,
            current: start,
            outcome,
        })
    }

    /// The graph being searched.
    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    /// The node that will be expanded by the next [`step`](Self::step).
    pub fn current(&self) -> NodeIndex {
        self.current
    }

    /// The open set.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Expands the current node and picks the next one.
    ///
    /// Once the search is over every further call returns the same
    /// [`Step::Done`].
    pub fn step<O: SearchObserver>(&mut self, observer: &mut O) -> Step {
        if let Some(outcome) = &self.outcome {
            return Step::Done(outcome.clone());
        }

        let expanded = self.current;
        self.relax_neighbors(observer);
        observer.on_expanded(&*self.graph, expanded);

        let outcome = match self.next_current() {
            Some(next) => {
                self.current = next;
                if next != self.end {
                    return Step::Expanded(expanded);
                }
                SearchResult::Found(self.reconstruct_path())
            }
            None => SearchResult::Unreachable,
        };

        match &outcome {
            SearchResult::Found(path) => info!(
                "found path of {} nodes with cost {}",
                path.len(),
                path.cost
            ),
            SearchResult::Unreachable => info!("no path from {:?} to {:?}", self.start, self.end),
        }
        self.outcome = Some(outcome.clone());
        Step::Done(outcome)
    }

    /// Steps until the search is over.
    pub fn run<O: SearchObserver>(mut self, observer: &mut O) -> SearchResult {
        loop {
            if let Step::Done(result) = self.step(observer) {
                return result;
            }
        }
    }

    //---------------------------------------------------------------
    // Private functions
    //---------------------------------------------------------------

    /// Relaxes every neighbor of the current node.
    ///
    /// A neighbor is skipped only when the new cost is strictly worse, so
    /// an equally good path re-parents it. Closed neighbors are never
    /// touched: their score is final and re-parenting them on a tie could
    /// close a loop of parent links through zero-length edges.
    fn relax_neighbors<O: SearchObserver>(&mut self, observer: &mut O) {
        let current = self.current;
        let (current_position, current_cost) = match self.graph.node(current) {
            Some(node) => (node.position, node.search.cost_so_far),
            None => return,
        };
        let end_position = match self.graph.position(self.end) {
            Some(position) => position,
            None => return,
        };

        let neighbors: Vec<NodeIndex> = self.graph.neighbors(current).collect();
        for neighbor in neighbors {
            let Some(node) = self.graph.node_mut(neighbor) else {
                continue;
            };
            if node.search.is_closed() {
                continue;
            }

            let tentative_cost = current_cost + current_position.distance_to(&node.position);
            if tentative_cost > node.search.cost_so_far {
                continue;
            }

            node.search.cost_so_far = tentative_cost;
            node.search.heuristic = node.position.distance_to(&end_position);
            node.search.total_priority = tentative_cost + node.search.heuristic;
            node.search.parent = Some(current);
            node.search.status = Status::Frontier;
            let priority = node.search.total_priority;

            debug!(
                "relaxed {:?} via {:?}: g = {}, f = {}",
                neighbor, current, tentative_cost, priority
            );
            self.frontier.insert(neighbor, priority);
            observer.on_relaxed(&*self.graph, neighbor);
        }
    }

    /// Pulls the best open node off the frontier and closes it, skipping
    /// entries left behind for nodes that were closed in the meantime.
    fn next_current(&mut self) -> Option<NodeIndex> {
        loop {
            let next = match self.frontier.extract_min() {
                Ok(next) => next,
                Err(Error::EmptyFrontier) => return None,
                Err(e) => {
                    warn!("unexpected frontier error: {}", e);
                    return None;
                }
            };
            let Some(node) = self.graph.node_mut(next) else {
                continue;
            };
            if node.search.is_closed() {
                debug!("skipping stale frontier entry for {:?}", next);
                continue;
            }
            node.search.status = Status::Closed;
            debug!("expanding {:?}", next);
            return Some(next);
        }
    }

    /// Walks parent links back from the end node.
    ///
    /// Parents are always closed before their children, so the links form
    /// a tree rooted at the start node.
    fn reconstruct_path(&self) -> Path {
        let mut nodes = vec![self.end];
        let mut current = self.end;
        while let Some(parent) = self.graph.node(current).and_then(|n| n.search.parent) {
            nodes.push(parent);
            current = parent;
        }
        nodes.reverse();

        let cost = self
            .graph
            .node(self.end)
            .map(|n| n.search.cost_so_far)
            .unwrap_or_default();
        Path { nodes, cost }
    }
}

/// Sums the edge lengths along `nodes`.
///
/// # Returns
/// [`None`] if a node is missing or two consecutive nodes share no edge.
pub fn path_length(graph: &Graph, nodes: &[NodeIndex]) -> Option<f32> {
    nodes.windows(2).try_fold(0.0, |total, pair| {
        if graph.are_connected(pair[0], pair[1]) {
            Some(total + graph.distance(pair[0], pair[1])?)
        } else {
            None
        }
    })
}

fn missing_node(graph: &Graph, start: NodeIndex, end: NodeIndex) -> Error {
    if graph.contains(start) {
        Error::NodeNotFound(end)
    } else {
        Error::NodeNotFound(start)
    }
}
