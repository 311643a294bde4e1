//! Route queries over a [`RailNetwork`](crate::RailNetwork)
//!
//! Each query is a small value built with a constructor and optional
//! modifiers, then run with `execute`. Queries borrow the network immutably.

mod distance;
mod path;
mod routes;
mod trips;
mod types;

pub use distance::DistanceQuery;
pub use path::ShortestRouteQuery;
pub use routes::RouteCountQuery;
pub use trips::{StopBound, TripQuery};
pub use types::{Distance, ShortestRoute};
