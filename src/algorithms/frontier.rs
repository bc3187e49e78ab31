//! The open set of a search.
//!
//! A plain vector scanned linearly on every extraction. There is no
//! decrease-key: a node whose score improves is inserted again and the
//! older entry stays behind. The search skips such stale entries when
//! they surface, by checking whether the node is already closed.

use ordered_float::OrderedFloat;
use petgraph::stable_graph::NodeIndex;

use crate::error::{Error, Result};

/// A queued node and its priority at the time it was queued.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node: NodeIndex,
    pub priority: OrderedFloat<f32>,
}

/// Candidate nodes awaiting expansion.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Appends `node` with the given priority snapshot.
    pub fn insert(&mut self, node: NodeIndex, priority: f32) {
        self.entries.push(FrontierEntry {
            node,
            priority: OrderedFloat(priority),
        });
    }

    /// Removes and returns the node with the smallest priority.
    ///
    /// Ties go to the entry inserted first.
    ///
    /// # Errors
    /// [`Error::EmptyFrontier`] when nothing is queued.
    ///
    /// # Time Complexity
    /// *O*(*n*) in the number of queued entries.
    pub fn extract_min(&mut self) -> Result<NodeIndex> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .min_by_key(|(i, entry)| (entry.priority, *i))
            .map(|(i, _)| i)
            .ok_or(Error::EmptyFrontier)?;

        // `remove` rather than `swap_remove` keeps insertion order intact
        // for tie breaking.
        Ok(self.entries.remove(position).node)
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over queued entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.entries.iter()
    }
}
