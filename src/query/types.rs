//! Query result types

use serde::{Deserialize, Serialize};

/// Length of a route, or the sentinel meaning "no route exists"
///
/// `UNREACHABLE` compares greater than every real distance, so it behaves as
/// infinity when ordering candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(u64);

impl Distance {
    /// Sentinel infinity
    pub const UNREACHABLE: Distance = Distance(u64::MAX);

    pub const ZERO: Distance = Distance(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn is_reachable(self) -> bool {
        self != Self::UNREACHABLE
    }

    /// The distance as a number, or `None` for the sentinel
    pub fn value(self) -> Option<u64> {
        self.is_reachable().then_some(self.0)
    }

    /// Raw value, `u64::MAX` for the sentinel
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Extend by one edge. Saturates so real distances never wrap into the sentinel.
    pub(crate) fn extend(self, weight: u32) -> Self {
        if !self.is_reachable() {
            return self;
        }
        Self(self.0.saturating_add(u64::from(weight)).min(u64::MAX - 1))
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "NO SUCH ROUTE"),
        }
    }
}

/// Result of a shortest-route query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestRoute {
    /// Length of the best route, or [`Distance::UNREACHABLE`]
    pub distance: Distance,
    /// Town labels along one best route, source and target inclusive.
    /// Empty when unreachable.
    pub path: Vec<String>,
}

impl ShortestRoute {
    pub fn unreachable() -> Self {
        Self {
            distance: Distance::UNREACHABLE,
            path: Vec::new(),
        }
    }

    pub fn found(distance: Distance, path: Vec<String>) -> Self {
        Self { distance, path }
    }

    pub fn is_found(&self) -> bool {
        self.distance.is_reachable()
    }

    /// Number of hops along the route
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_orders_last() {
        assert!(Distance::new(u64::MAX - 1) < Distance::UNREACHABLE);
        assert!(Distance::ZERO < Distance::new(1));
    }

    #[test]
    fn test_extend_never_produces_sentinel() {
        let near_max = Distance::new(u64::MAX - 2);
        assert!(near_max.extend(10).is_reachable());
        assert_eq!(Distance::UNREACHABLE.extend(1), Distance::UNREACHABLE);
        assert_eq!(Distance::new(4).extend(5), Distance::new(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(Distance::new(9).to_string(), "9");
        assert_eq!(Distance::UNREACHABLE.to_string(), "NO SUCH ROUTE");
        assert_eq!(Distance::UNREACHABLE.value(), None);
    }

    #[test]
    fn test_shortest_route_stops() {
        let route = ShortestRoute::found(Distance::new(9), vec!["A".into(), "B".into(), "C".into()]);
        assert!(route.is_found());
        assert_eq!(route.stops(), 2);
        assert_eq!(ShortestRoute::unreachable().stops(), 0);
    }
}
