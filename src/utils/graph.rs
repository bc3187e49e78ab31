//! Helper functons for building graphs.

use rand::Rng;

use crate::graph::Graph;

/// Build random edges among the nodes of `graph`.
///
/// The function considers every unordered pair of nodes once and
/// connects it with probability `odds_constant / distance`. Nearby
/// nodes are therefore much more likely to be connected than distant
/// ones, and pairs closer than `odds_constant` are always connected.
/// Coincident nodes are always connected too.
///
/// Existing edges are kept.
///
/// # Arguments
/// * `graph` - The graph to add edges to.
/// * `odds_constant` - The `K` in `K / distance`.
/// * `rng` - Source of the uniform draws in `[0, 1)`.
///
/// # Returns
/// The number of pairs that were connected.
///
/// # Time Complexity
/// *O*(*n^2*) in the number of nodes.
pub fn random_edges<R: Rng>(graph: &mut Graph, odds_constant: f32, rng: &mut R) -> usize {
    let nodes = graph.node_indices();
    let mut connected = 0;
    for (i, &from) in nodes.iter().enumerate() {
        for &to in &nodes[i + 1..] {
            let Some(distance) = graph.distance(from, to) else {
                continue;
            };
            let odds = if distance > 0.0 {
                odds_constant / distance
            } else {
                f32::INFINITY
            };
            if rng.gen::<f32>() < odds && graph.connect(from, to).is_ok() {
                connected += 1;
            }
        }
    }
    debug!("random_edges connected {} pairs", connected);
    connected
}
