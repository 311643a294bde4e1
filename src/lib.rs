//! railnet: route queries over small transit networks
//!
//! A network is a set of towns joined by weighted one-way routes. Once built,
//! it answers four kinds of query:
//!
//! - **Distance**: the length of an exact route such as `A-B-C`
//! - **Trips**: how many walks join two towns within a hop bound
//! - **Routes**: how many walks join two towns below a distance bound
//! - **Shortest route**: Dijkstra, where a town to itself means the shortest cycle
//!
//! # Example
//!
//! ```
//! use railnet::{Distance, RailNetwork};
//!
//! let mut network = RailNetwork::new();
//! for town in ["A", "B", "C"] {
//!     network.add_vertex(town).unwrap();
//! }
//! network.add_edge("A", "B", 5).unwrap();
//! network.add_edge("B", "C", 4).unwrap();
//!
//! assert_eq!(network.distance(&["A", "B", "C"]).unwrap(), 9);
//! assert_eq!(network.shortest_route("A", "C").unwrap(), Distance::new(9));
//! assert_eq!(network.shortest_route("C", "A").unwrap(), Distance::UNREACHABLE);
//! ```

pub mod config;
mod graph;
pub mod logging;
pub mod menu;
pub mod query;
pub mod server;

pub use config::{NetworkSpec, RouteSpec, ServerConfig};
pub use graph::{
    Edge, GraphError, GraphResult, Node, NodeId, QueryLimits, RailNetwork, Weight,
    DEFAULT_MAX_EXPANSIONS,
};
pub use menu::{MenuOption, Outcome};
pub use query::{
    Distance, DistanceQuery, RouteCountQuery, ShortestRoute, ShortestRouteQuery, StopBound,
    TripQuery,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
