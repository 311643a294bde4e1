//! Core network data structures

mod edge;
mod engine;
mod node;

pub use edge::{Edge, Weight};
pub use engine::{
    GraphError, GraphResult, QueryLimits, RailNetwork, DEFAULT_MAX_EXPANSIONS,
};
pub use node::{Node, NodeId};
