//! Directed, weighted route between two towns

use super::node::NodeId;
use serde::Serialize;

/// Route length. Unsigned, so negative weights cannot be expressed.
pub type Weight = u32;

/// A one-way route from `from` to `to`
///
/// Edges are immutable once created and owned by the edge list of their
/// `from` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Origin node
    pub from: NodeId,
    /// Destination node
    pub to: NodeId,
    /// Route length
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// True when the edge starts and ends at the same node
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_directed() {
        let edge = Edge::new(NodeId::new(0), NodeId::new(1), 4);
        assert_ne!(edge, Edge::new(NodeId::new(1), NodeId::new(0), 4));
        assert!(!edge.is_loop());
    }

    #[test]
    fn test_self_loop() {
        let edge = Edge::new(NodeId::new(2), NodeId::new(2), 1);
        assert!(edge.is_loop());
    }
}
