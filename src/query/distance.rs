//! Exact route length lookup

use crate::graph::{GraphError, GraphResult, RailNetwork};
use tracing::trace;

/// Query measuring a fixed sequence of towns, e.g. `A-B-C`
#[derive(Debug, Clone)]
pub struct DistanceQuery {
    /// Towns to visit, in order
    pub stops: Vec<String>,
}

impl DistanceQuery {
    /// Create a query for the route through `stops`
    pub fn along<S: AsRef<str>>(stops: &[S]) -> Self {
        Self {
            stops: stops.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Sum the weights of the direct edges between consecutive stops
    ///
    /// Every pair must be joined by a direct edge; otherwise the whole route
    /// is rejected with [`GraphError::NoSuchRoute`].
    pub fn execute(&self, network: &RailNetwork) -> GraphResult<u64> {
        if self.stops.len() < 2 {
            return Err(GraphError::InvalidArgument(format!(
                "a route needs at least two towns, got {}",
                self.stops.len()
            )));
        }

        let mut total: u64 = 0;
        for pair in self.stops.windows(2) {
            let from = network.id_of(&pair[0]).ok_or(GraphError::NoSuchRoute)?;
            let to = network.id_of(&pair[1]).ok_or(GraphError::NoSuchRoute)?;
            let edge = network
                .node_at(from)
                .edge_to(to)
                .ok_or(GraphError::NoSuchRoute)?;
            total += u64::from(edge.weight);
        }

        trace!(route = %self.stops.join("-"), total, "measured route");
        Ok(total)
    }
}
