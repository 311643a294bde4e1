//! Network definitions and runtime configuration

use crate::graph::{GraphError, GraphResult, QueryLimits, RailNetwork, Weight};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use tracing::debug;

/// Default listen address for the query server
pub const DEFAULT_ADDR: &str = "127.0.0.1:12345";

/// A single one-way route in a network definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl RouteSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Parse the compact `AB5` notation: two single-character towns followed
    /// by the weight
    pub fn parse_compact(token: &str) -> GraphResult<Self> {
        let token = token.trim();
        let mut chars = token.chars();
        let (Some(from), Some(to)) = (chars.next(), chars.next()) else {
            return Err(GraphError::Parse(format!("route '{token}' is too short")));
        };
        if !from.is_alphanumeric() || !to.is_alphanumeric() {
            return Err(GraphError::Parse(format!("route '{token}' has invalid town names")));
        }
        let weight = chars
            .as_str()
            .parse::<Weight>()
            .map_err(|e| GraphError::Parse(format!("route '{token}' has invalid weight: {e}")))?;
        Ok(Self::new(from.to_string(), to.to_string(), weight))
    }
}

/// Serializable description of a network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Towns to create up front, in order. Towns named only by routes are
    /// added implicitly.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub towns: Vec<String>,
    /// One-way routes
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

impl NetworkSpec {
    /// The five-town reference network
    pub fn canonical() -> Self {
        let routes = [
            ("A", "B", 5),
            ("B", "C", 4),
            ("C", "D", 8),
            ("D", "C", 8),
            ("D", "E", 6),
            ("A", "D", 5),
            ("C", "E", 2),
            ("E", "B", 3),
            ("A", "E", 7),
        ]
        .into_iter()
        .map(|(from, to, weight)| RouteSpec::new(from, to, weight))
        .collect();

        Self {
            towns: ["A", "B", "C", "D", "E"].map(String::from).to_vec(),
            routes,
        }
    }

    /// Parse a comma or whitespace separated list of compact routes
    pub fn parse_routes(text: &str) -> GraphResult<Self> {
        let routes = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(RouteSpec::parse_compact)
            .collect::<GraphResult<Vec<_>>>()?;
        Ok(Self {
            towns: Vec::new(),
            routes,
        })
    }

    /// Load a definition, choosing the format from the file extension:
    /// `.json`, `.yaml`/`.yml`, anything else is a compact route list
    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let spec: Self = match extension.as_deref() {
            Some("json") => serde_json::from_str(&text)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            _ => Self::parse_routes(&text)?,
        };
        debug!(path = %path.display(), routes = spec.routes.len(), "loaded network definition");
        Ok(spec)
    }

    /// Build a network with default query limits
    pub fn build(&self) -> GraphResult<RailNetwork> {
        self.build_with_limits(QueryLimits::default())
    }

    pub fn build_with_limits(&self, limits: QueryLimits) -> GraphResult<RailNetwork> {
        let mut network = RailNetwork::new().with_limits(limits);

        for town in &self.towns {
            network.add_vertex(town)?;
        }
        for route in &self.routes {
            for town in [&route.from, &route.to] {
                if network.id_of(town).is_none() {
                    network.add_vertex(town)?;
                }
            }
            network.add_edge(&route.from, &route.to, route.weight)?;
        }

        debug!(
            towns = network.node_count(),
            routes = network.edge_count(),
            "built network"
        );
        Ok(network)
    }
}

/// Configuration for the TCP query server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Parse a listen address such as `127.0.0.1:12345`
    pub fn from_addr(addr: &str) -> GraphResult<Self> {
        addr.parse()
            .map(Self::new)
            .map_err(|e| GraphError::InvalidArgument(format!("invalid listen address '{addr}': {e}")))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 12345)))
    }
}
