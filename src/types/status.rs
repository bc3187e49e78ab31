//! Definition for the [`Status`] type, implemented by an enum.

use serde::{Deserialize, Serialize};

/// Represents the search status of a [`super::node::Node`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Never enqueued by the current search.
    #[default]
    Unvisited,
    /// Enqueued and waiting for expansion.
    Frontier,
    /// Expanded. Its score is final for the current search.
    Closed,
}
