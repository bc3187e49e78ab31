//! Shortest path search over 2D point graphs.
//!
//! Nodes are points on a plane. Edges are undirected and weighted by the
//! Euclidean distance between their endpoints. The library covers:
//! * building graphs by hand ([`Graph`]) or at random
//!   ([`RandomGraphGenerator`]), where nearby nodes are more likely to be
//!   connected;
//! * a best-first search ([`PathSearch`]) that can run to completion or
//!   one expansion at a time, reporting progress to a [`SearchObserver`];
//! * a [`Session`] facade for interactive editors.
//!
//! ```
//! use pathgraph::{Graph, Point, SearchResult};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(Point::new(0.0, 0.0));
//! let b = graph.add_node(Point::new(10.0, 0.0));
//! let c = graph.add_node(Point::new(10.0, 10.0));
//! graph.connect(a, b).unwrap();
//! graph.connect(b, c).unwrap();
//!
//! match graph.shortest_path(a, c).unwrap() {
//!     SearchResult::Found(path) => assert_eq!(path.nodes, vec![a, b, c]),
//!     SearchResult::Unreachable => unreachable!(),
//! }
//! ```

#[macro_use]
extern crate log;

pub mod config;
pub mod error;

pub mod types {
    pub mod edge;
    pub mod node;
    pub mod point;
    pub mod status;
}

pub mod algorithms {
    pub mod frontier;
    pub mod graph;
    pub mod search;
}

pub mod utils {
    pub mod generator;
    pub mod graph;
    pub mod session;
}

pub use algorithms::{frontier, graph, search};
pub use types::{edge, node, point, status};
pub use utils::{generator, session};

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use frontier::Frontier;
pub use generator::{RandomGraphGenerator, Scene};
pub use graph::Graph;
pub use node::{Node, SearchState};
pub use petgraph::stable_graph::NodeIndex;
pub use point::Point;
pub use search::{Path, PathSearch, SearchObserver, SearchResult, Step};
pub use session::Session;
pub use status::Status;
