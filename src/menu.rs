//! The fixed list of reference queries offered by the CLI report and the server

use crate::graph::{GraphError, GraphResult, RailNetwork};
use crate::query::{Distance, TripQuery};
use serde::Serialize;

/// Outcome of running a menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Value(u64),
    NoSuchRoute,
    Unreachable,
}

impl From<Distance> for Outcome {
    fn from(distance: Distance) -> Self {
        distance.value().map_or(Outcome::Unreachable, Outcome::Value)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "{value}"),
            Outcome::NoSuchRoute | Outcome::Unreachable => write!(f, "NO SUCH ROUTE"),
        }
    }
}

/// The ten reference queries, numbered as presented to users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    DistanceAbc = 1,
    DistanceAd = 2,
    DistanceAdc = 3,
    DistanceAebcd = 4,
    DistanceAed = 5,
    TripsCcMax3 = 6,
    TripsAcExactly4 = 7,
    ShortestAc = 8,
    ShortestBb = 9,
    RoutesCcBelow30 = 10,
}

impl MenuOption {
    pub const ALL: [MenuOption; 10] = [
        MenuOption::DistanceAbc,
        MenuOption::DistanceAd,
        MenuOption::DistanceAdc,
        MenuOption::DistanceAebcd,
        MenuOption::DistanceAed,
        MenuOption::TripsCcMax3,
        MenuOption::TripsAcExactly4,
        MenuOption::ShortestAc,
        MenuOption::ShortestBb,
        MenuOption::RoutesCcBelow30,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.number() == number)
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuOption::DistanceAbc => "distance of route A-B-C",
            MenuOption::DistanceAd => "distance of route A-D",
            MenuOption::DistanceAdc => "distance of route A-D-C",
            MenuOption::DistanceAebcd => "distance of route A-E-B-C-D",
            MenuOption::DistanceAed => "distance of route A-E-D",
            MenuOption::TripsCcMax3 => "trips from C to C with at most 3 stops",
            MenuOption::TripsAcExactly4 => "trips from A to C with exactly 4 stops",
            MenuOption::ShortestAc => "shortest route from A to C",
            MenuOption::ShortestBb => "shortest route from B to B",
            MenuOption::RoutesCcBelow30 => "routes from C to C shorter than 30",
        }
    }

    /// Run the query. `NoSuchRoute` is folded into the outcome; other errors
    /// propagate.
    pub fn run(self, network: &RailNetwork) -> GraphResult<Outcome> {
        let result = match self {
            MenuOption::DistanceAbc => network.distance(&["A", "B", "C"]),
            MenuOption::DistanceAd => network.distance(&["A", "D"]),
            MenuOption::DistanceAdc => network.distance(&["A", "D", "C"]),
            MenuOption::DistanceAebcd => network.distance(&["A", "E", "B", "C", "D"]),
            MenuOption::DistanceAed => network.distance(&["A", "E", "D"]),
            MenuOption::TripsCcMax3 => network.number_of_trips("C", "C", 3),
            MenuOption::TripsAcExactly4 => TripQuery::between("A", "C").exact_stops(4).execute(network),
            MenuOption::ShortestAc => return network.shortest_route("A", "C").map(Outcome::from),
            MenuOption::ShortestBb => return network.shortest_route("B", "B").map(Outcome::from),
            MenuOption::RoutesCcBelow30 => network.amount_of_routes("C", "C", 30),
        };

        match result {
            Ok(value) => Ok(Outcome::Value(value)),
            Err(GraphError::NoSuchRoute) => Ok(Outcome::NoSuchRoute),
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] - {}", self.number(), self.description())
    }
}
