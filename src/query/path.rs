//! Shortest route search (Dijkstra)

use super::types::{Distance, ShortestRoute};
use crate::graph::{GraphResult, NodeId, RailNetwork};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::trace;

/// Priority queue entry ordered by distance, then node index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    distance: Distance,
    node: NodeId,
}

impl Frontier {
    fn key(&self) -> (Distance, NodeId) {
        (self.distance, self.node)
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Query for the shortest route between two towns
///
/// When source and target coincide, the answer is the shortest cycle through
/// the source rather than the trivial zero-length route.
#[derive(Debug, Clone)]
pub struct ShortestRouteQuery {
    pub start: String,
    pub end: String,
}

impl ShortestRouteQuery {
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Execute the search
    ///
    /// All distance bookkeeping lives in tables owned by this call, so
    /// repeated or concurrent queries never see each other's state.
    pub fn execute(&self, network: &RailNetwork) -> GraphResult<ShortestRoute> {
        let source = network.validate(&self.start)?;
        let target = network.validate(&self.end)?;

        // Source is also the goal: its zero-distance seed must not settle it,
        // otherwise a cycle back to it could never be recorded.
        let source_is_goal = source == target;
        let mut source_pending = source_is_goal;
        let mut source_reached = false;

        let mut distances: HashMap<NodeId, Distance> = HashMap::new();
        let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
        let mut settled: HashSet<NodeId> = HashSet::new();
        let mut queue: BinaryHeap<Reverse<Frontier>> = BinaryHeap::new();

        distances.insert(source, Distance::ZERO);
        queue.push(Reverse(Frontier {
            distance: Distance::ZERO,
            node: source,
        }));

        while let Some(Reverse(Frontier { distance, node })) = queue.pop() {
            if settled.contains(&node) {
                continue;
            }
            let recorded = distances.get(&node).copied().unwrap_or(Distance::UNREACHABLE);
            if distance > recorded {
                continue;
            }

            if node == source && source_pending {
                source_pending = false;
            } else {
                settled.insert(node);
            }

            for edge in network.outgoing(node) {
                if settled.contains(&edge.to) {
                    continue;
                }
                let candidate = distance.extend(edge.weight);
                let current = distances.get(&edge.to).copied().unwrap_or(Distance::UNREACHABLE);

                let returns_to_source = source_is_goal && edge.to == source && !source_reached;
                if candidate < current || returns_to_source {
                    if edge.to == source {
                        source_reached = true;
                    }
                    distances.insert(edge.to, candidate);
                    predecessors.insert(edge.to, node);
                    queue.push(Reverse(Frontier {
                        distance: candidate,
                        node: edge.to,
                    }));
                }
            }
        }

        let reached = if source_is_goal {
            source_reached
        } else {
            distances.contains_key(&target)
        };
        if !reached {
            trace!(start = %self.start, end = %self.end, "no route");
            return Ok(ShortestRoute::unreachable());
        }

        let distance = distances[&target];
        let path = reconstruct_path(network, source, target, &predecessors);
        trace!(start = %self.start, end = %self.end, %distance, stops = path.len().saturating_sub(1), "shortest route");
        Ok(ShortestRoute::found(distance, path))
    }
}

/// Walk predecessors back from the target until the source is reached
///
/// At least one step is always taken, which covers the round-trip case where
/// source and target are the same node.
fn reconstruct_path(
    network: &RailNetwork,
    source: NodeId,
    target: NodeId,
    predecessors: &HashMap<NodeId, NodeId>,
) -> Vec<String> {
    let mut labels = vec![network.node_at(target).label().to_string()];
    let mut current = target;

    while let Some(&previous) = predecessors.get(&current) {
        labels.push(network.node_at(previous).label().to_string());
        if previous == source {
            break;
        }
        current = previous;
    }

    labels.reverse();
    labels
}
