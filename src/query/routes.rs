//! Bounded-distance route counting

use crate::graph::{GraphError, GraphResult, NodeId, RailNetwork};
use tracing::{trace, warn};

/// Query counting routes between two towns shorter than a distance bound
///
/// Routes may revisit towns. Each arrival at the target with an accumulated
/// distance strictly below the bound counts, and exploration continues past
/// the target to find longer qualifying routes.
#[derive(Debug, Clone)]
pub struct RouteCountQuery {
    pub start: String,
    pub end: String,
    /// Exclusive upper bound on route length
    pub max_distance: u64,
}

impl RouteCountQuery {
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            max_distance: 0,
        }
    }

    /// Set the exclusive distance bound
    pub fn max_distance(mut self, max_distance: u64) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn execute(&self, network: &RailNetwork) -> GraphResult<u64> {
        let start = network.validate(&self.start)?;
        let end = network.validate(&self.end)?;
        let budget = network.limits().max_expansions;

        // Each entry carries its own accumulated distance, always < max_distance
        // except for the seed.
        let mut stack: Vec<(NodeId, u64)> = vec![(start, 0)];
        let mut expansions = 0usize;
        let mut routes = 0u64;

        while let Some((current, travelled)) = stack.pop() {
            expansions += 1;
            if expansions > budget {
                warn!(start = %self.start, end = %self.end, limit = budget, "route enumeration exceeded budget");
                return Err(GraphError::SearchLimitExceeded { limit: budget });
            }

            for edge in network.outgoing(current) {
                let next = travelled.saturating_add(u64::from(edge.weight));
                if next >= self.max_distance {
                    continue;
                }
                if edge.to == end {
                    routes += 1;
                }
                stack.push((edge.to, next));
            }
        }

        trace!(start = %self.start, end = %self.end, max_distance = self.max_distance, routes, expansions, "counted routes");
        Ok(routes)
    }
}
