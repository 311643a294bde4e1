//! Town representation in the transit network

use super::edge::Edge;
use serde::Serialize;

/// Dense index of a node inside its owning network
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the network arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A town in the network together with its outgoing routes
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Arena index
    pub id: NodeId,
    /// Unique town label (e.g. "A")
    label: String,
    /// Outgoing edges, all originating at this node, in insertion order
    edges: Vec<Edge>,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            edges: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Outgoing edges of this node
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// First edge leading directly to `target`, if any
    pub fn edge_to(&self, target: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.to == target)
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Attach an outgoing edge. The caller guarantees `edge.from == self.id`.
    pub(crate) fn push_edge(&mut self, edge: Edge) {
        debug_assert_eq!(edge.from, self.id);
        self.edges.push(edge);
    }
}
