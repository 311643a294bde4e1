//! Bounded-hop trip counting

use crate::graph::{GraphError, GraphResult, NodeId, RailNetwork};
use tracing::{trace, warn};

/// How the hop bound of a [`TripQuery`] is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBound {
    /// Count trips with 1 up to `n` hops
    AtMost(usize),
    /// Count trips with exactly `n` hops
    Exactly(usize),
}

impl StopBound {
    fn limit(self) -> usize {
        match self {
            StopBound::AtMost(n) | StopBound::Exactly(n) => n,
        }
    }

    fn accepts(self, hops: usize) -> bool {
        match self {
            StopBound::AtMost(n) => hops >= 1 && hops <= n,
            StopBound::Exactly(n) => hops >= 1 && hops == n,
        }
    }
}

/// Query counting walks between two towns under a hop bound
///
/// Walks may revisit towns, including the target: a walk that reaches the
/// target and keeps going is explored further, and each arrival within the
/// bound is one trip. The zero-hop walk never counts, so `start == end`
/// only counts genuine round trips.
#[derive(Debug, Clone)]
pub struct TripQuery {
    pub start: String,
    pub end: String,
    pub bound: StopBound,
}

impl TripQuery {
    /// Create a trip query; the default bound is at most one stop
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            bound: StopBound::AtMost(1),
        }
    }

    /// Count trips with at most `stops` hops
    pub fn max_stops(mut self, stops: usize) -> Self {
        self.bound = StopBound::AtMost(stops);
        self
    }

    /// Count trips with exactly `stops` hops
    pub fn exact_stops(mut self, stops: usize) -> Self {
        self.bound = StopBound::Exactly(stops);
        self
    }

    /// Run an exhaustive depth-first enumeration with an explicit stack
    pub fn execute(&self, network: &RailNetwork) -> GraphResult<u64> {
        let start = network.validate(&self.start)?;
        let end = network.validate(&self.end)?;
        let limit = self.bound.limit();
        let budget = network.limits().max_expansions;

        // Every entry satisfies hops <= limit.
        let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
        let mut expansions = 0usize;
        let mut trips = 0u64;

        while let Some((current, hops)) = stack.pop() {
            expansions += 1;
            if expansions > budget {
                warn!(start = %self.start, end = %self.end, limit = budget, "trip enumeration exceeded budget");
                return Err(GraphError::SearchLimitExceeded { limit: budget });
            }

            if current == end && self.bound.accepts(hops) {
                trips += 1;
            }

            if hops < limit {
                stack.extend(network.outgoing(current).iter().map(|e| (e.to, hops + 1)));
            }
        }

        trace!(start = %self.start, end = %self.end, bound = ?self.bound, trips, expansions, "counted trips");
        Ok(trips)
    }
}
