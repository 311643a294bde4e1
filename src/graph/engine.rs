//! RailNetwork: the transit graph and its query surface

use super::edge::{Edge, Weight};
use super::node::{Node, NodeId};
use crate::query::{
    Distance, DistanceQuery, RouteCountQuery, ShortestRouteQuery, TripQuery,
};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building or querying a network
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("NO SUCH ROUTE")]
    NoSuchRoute,

    #[error("Town already exists: {0}")]
    DuplicateVertex(String),

    #[error("Route already exists: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("Search aborted after {limit} expansions")]
    SearchLimitExceeded { limit: usize },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for network operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Default bound on stack pops for enumeration queries
pub const DEFAULT_MAX_EXPANSIONS: usize = 10_000_000;

/// Resource bounds applied to enumeration queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Maximum number of search states popped before a query gives up
    pub max_expansions: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

/// A directed, weighted transit network
///
/// Nodes live in an arena indexed by [`NodeId`]; labels map to indices.
/// Construction is append-only and queries never mutate the network, so a
/// built network can be shared freely between readers.
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    limits: QueryLimits,
}

impl RailNetwork {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the enumeration limits
    pub fn with_limits(mut self, limits: QueryLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> QueryLimits {
        self.limits
    }

    /// Add an empty town
    ///
    /// Rejects empty labels and labels that are already present. A rejected
    /// duplicate leaves the existing node and every edge pointing at it intact.
    pub fn add_vertex(&mut self, label: &str) -> GraphResult<NodeId> {
        if label.is_empty() {
            return Err(GraphError::InvalidArgument(
                "town label must not be empty".to_string(),
            ));
        }
        if self.index.contains_key(label) {
            return Err(GraphError::DuplicateVertex(label.to_string()));
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(id, label));
        self.index.insert(label.to_string(), id);
        debug!(town = label, id = id.index(), "added town");
        Ok(id)
    }

    /// Add a one-way route between two existing towns
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> GraphResult<()> {
        let from_id = self.validate(from)?;
        let to_id = self.validate(to)?;

        let origin = &mut self.nodes[from_id.index()];
        if origin.edge_to(to_id).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        origin.push_edge(Edge::new(from_id, to_id, weight));
        debug!(from, to, weight, "added route");
        Ok(())
    }

    /// Resolve a label to its node, rejecting empty and unknown labels
    pub fn validate(&self, label: &str) -> GraphResult<NodeId> {
        if label.is_empty() {
            return Err(GraphError::InvalidArgument(
                "cannot route from or to an empty town label".to_string(),
            ));
        }
        self.id_of(label)
            .ok_or_else(|| GraphError::InvalidArgument(format!("town {label} is not in the network")))
    }

    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Node for `id`, or `None` when the id does not belong to this network
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Node for an id handed out by this network
    pub(crate) fn node_at(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get_node(&self, label: &str) -> Option<&Node> {
        self.id_of(label).and_then(|id| self.node(id))
    }

    /// Outgoing edges of a node; empty for ids outside this network
    pub fn outgoing(&self, id: NodeId) -> &[Edge] {
        self.node(id).map(Node::edges).unwrap_or_default()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.nodes.iter().flat_map(|n| n.edges())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    /// Total length of the exact route through `path`
    pub fn distance<S: AsRef<str>>(&self, path: &[S]) -> GraphResult<u64> {
        DistanceQuery::along(path).execute(self)
    }

    /// Number of walks from `start` to `end` with at most `max_stops` hops
    pub fn number_of_trips(&self, start: &str, end: &str, max_stops: usize) -> GraphResult<u64> {
        TripQuery::between(start, end).max_stops(max_stops).execute(self)
    }

    /// Number of routes from `start` to `end` shorter than `max_distance`
    pub fn amount_of_routes(&self, start: &str, end: &str, max_distance: u64) -> GraphResult<u64> {
        RouteCountQuery::between(start, end)
            .max_distance(max_distance)
            .execute(self)
    }

    /// Length of the shortest route from `start` to `end`
    ///
    /// Returns [`Distance::UNREACHABLE`] when no route exists. With
    /// `start == end` the answer is the shortest cycle through `start`.
    pub fn shortest_route(&self, start: &str, end: &str) -> GraphResult<Distance> {
        ShortestRouteQuery::between(start, end)
            .execute(self)
            .map(|route| route.distance)
    }
}
